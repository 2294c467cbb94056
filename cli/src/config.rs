use std::env;

use anyhow::{bail, Context, Result};
use lotto::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

/// Runtime settings, read from the environment and then command-line flags.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub locale: Locale,
    pub contract: ContractConfig,
    pub seed: Option<u64>,
    /// Print picker and order state as JSON instead of text.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            contract: ContractConfig::default(),
            seed: None,
            json: false,
        }
    }
}

impl AppConfig {
    /// Read `LOTTO_LOCALE`, `LOTTO_CONTRACT_ADDRESS` and `LOTTO_SEED`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(code) = env::var("LOTTO_LOCALE") {
            config.set_locale(&code);
        }
        if let Ok(address) = env::var("LOTTO_CONTRACT_ADDRESS") {
            config.contract = ContractConfig::new(address);
        }
        if let Ok(seed) = env::var("LOTTO_SEED") {
            config.seed = Some(parse_seed(&seed).context("LOTTO_SEED")?);
        }
        Ok(config)
    }

    /// Strip `--locale`, `--seed` and `--json` from `args`, applying them.
    pub fn apply_flags(&mut self, args: Vec<String>) -> Result<Vec<String>> {
        let mut rest = Vec::with_capacity(args.len());
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => self.json = true,
                "--locale" => match args.next() {
                    Some(code) => self.set_locale(&code),
                    None => bail!("--locale needs a value (en, zh or ko)"),
                },
                "--seed" => match args.next() {
                    Some(seed) => self.seed = Some(parse_seed(&seed).context("--seed")?),
                    None => bail!("--seed needs a value"),
                },
                _ => rest.push(arg),
            }
        }
        Ok(rest)
    }

    /// A seeded generator when a seed is set, otherwise one from entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn set_locale(&mut self, code: &str) {
        match Locale::from_code(code) {
            Some(locale) => self.locale = locale,
            None => warn!(code, "unsupported locale, keeping {}", self.locale),
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("seed must be an unsigned integer, got {raw:?}"))
}
