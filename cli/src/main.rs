mod config;
mod render;

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};
use lotto::prelude::*;
use lotto_api::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const USAGE: &str = "\
usage: lotto [--locale en|zh|ko] [--seed N] [--json] <command>

commands:
  games                              list games, pools and plays
  pick <game> <mode> <pool=v,v,...>  confirm a manual selection
  quick <game> [mode] [count]        confirm `count` auto picks
  dashboard                          show contract stats and listings";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut config = AppConfig::from_env()?;
    let args = config.apply_flags(env::args().skip(1).collect())?;
    debug!(?config, ?args, "starting");

    let catalog = Catalog::builtin();
    let translator = Translator::new(config.locale);
    let mut rng = config.rng();

    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };
    match command.as_str() {
        "games" => {
            print!("{}", render::games(&catalog, &translator));
            Ok(())
        }
        "pick" => pick(&catalog, &translator, &config, &mut rng, rest),
        "quick" => quick(&catalog, &translator, &config, &mut rng, rest),
        "dashboard" => dashboard(&translator, &config).await,
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => bail!("unknown command {other:?}\n\n{USAGE}"),
    }
}

fn pick(
    catalog: &Catalog,
    translator: &Translator,
    config: &AppConfig,
    rng: &mut StdRng,
    args: &[String],
) -> Result<()> {
    let [game_id, mode_id, pools @ ..] = args else {
        bail!("pick needs a game and a mode\n\n{USAGE}");
    };
    let game = catalog
        .find(game_id)
        .ok_or(LottoError::UnknownGame)
        .with_context(|| format!("game {game_id:?}"))?;

    let mut picker = Picker::with_rng(game.clone(), config.rng());
    picker.set_mode(mode_id);
    for entry in pools {
        let (pool_id, values) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected <pool>=<v,v,...>, got {entry:?}"))?;
        let pool_id = PoolId::from(pool_id);
        for value in values.split(',').filter(|value| !value.is_empty()) {
            let value: u32 = value
                .trim()
                .parse()
                .with_context(|| format!("{value:?} is not a number"))?;
            picker
                .toggle(&pool_id, value)
                .with_context(|| format!("{pool_id} {value}"))?;
        }
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&picker.state())?);
    }
    if let Some(issue) = picker.validation() {
        bail!("{}", translator.issue(&issue));
    }

    let mut order = Order::new();
    order.confirm(catalog, picker.confirm()?, rng)?;
    print_order(catalog, translator, config, &order)
}

fn quick(
    catalog: &Catalog,
    translator: &Translator,
    config: &AppConfig,
    rng: &mut StdRng,
    args: &[String],
) -> Result<()> {
    let Some(game_id) = args.first() else {
        bail!("quick needs a game\n\n{USAGE}");
    };
    let game = catalog
        .find(game_id)
        .ok_or(LottoError::UnknownGame)
        .with_context(|| format!("game {game_id:?}"))?;
    let count: usize = match args.get(2) {
        Some(count) => count.parse().with_context(|| format!("count {count:?}"))?,
        None => 1,
    };

    let mut picker = Picker::with_rng(game.clone(), config.rng());
    if let Some(mode_id) = args.get(1) {
        picker.set_mode(mode_id);
    }
    let mut order = Order::new();
    for _ in 0..count {
        picker.set_style(SelectionStyle::Random);
        order.confirm(catalog, picker.confirm()?, rng)?;
    }
    print_order(catalog, translator, config, &order)
}

fn print_order(
    catalog: &Catalog,
    translator: &Translator,
    config: &AppConfig,
    order: &Order,
) -> Result<()> {
    if config.json {
        let json = serde_json::json!({
            "batches": order.batches(),
            "totals": order.totals(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print!("{}", render::order(catalog, translator, order));
    }
    Ok(())
}

async fn dashboard(translator: &Translator, config: &AppConfig) -> Result<()> {
    let contract = OfflineContract;
    let cancel = CancellationFlag::new();
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    let stats = load_dashboard_stats(&contract, &config.contract, &cancel).await;
    let price = load_ticket_price(&contract, &config.contract, &cancel).await;
    let lotteries = load_active_lotteries(&contract, &config.contract, &cancel, now).await;
    let (Some(stats), Some(price), Some(lotteries)) = (stats, price, lotteries) else {
        return Ok(());
    };
    let rates = ConversionRates::fallback();

    print!(
        "{}",
        render::dashboard(translator, config, &stats, &price, &lotteries, &rates)
    );
    Ok(())
}
