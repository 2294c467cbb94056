//! Message lookup for English, Chinese and Korean.

use std::collections::HashMap;
use std::fmt;

use lotto_api::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::picker::ValidationIssue;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ko,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Zh, Locale::Ko];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ko => "ko",
        }
    }

    /// Parse a language tag such as "ko", "zh-CN" or "en_US".
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|locale| locale.code() == language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

type Table = HashMap<String, String>;

/// Placeholder arguments: `("count", &12)` fills `{count}`.
pub type Args<'a> = &'a [(&'a str, &'a dyn fmt::Display)];

/// Translation tables plus the active locale.
///
/// Lookups fall back from the active locale to English and finally to the
/// key itself.
#[derive(Clone, Debug)]
pub struct Translator {
    locale: Locale,
    tables: HashMap<Locale, Table>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

impl Translator {
    /// A translator loaded with the bundled tables.
    pub fn new(locale: Locale) -> Self {
        let tables = Locale::ALL
            .into_iter()
            .map(|locale| (locale, builtin_table(locale)))
            .collect();
        Self { locale, tables }
    }

    /// A translator with no tables; every lookup returns its key.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            tables: HashMap::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Merge a flat `{ key: message }` JSON object into a locale's table.
    /// Returns the number of entries read.
    pub fn extend_from_json(&mut self, locale: Locale, json: &str) -> Result<usize, LottoError> {
        let entries: Table = serde_json::from_str(json)?;
        let count = entries.len();
        self.tables.entry(locale).or_default().extend(entries);
        Ok(count)
    }

    /// Translate in the active locale.
    pub fn t(&self, key: &str, args: Args) -> String {
        self.translate(self.locale, key, args)
    }

    pub fn translate(&self, locale: Locale, key: &str, args: Args) -> String {
        let template = self
            .lookup(locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .unwrap_or(key);
        args.iter().fold(template.to_string(), |message, (name, value)| {
            message.replace(&format!("{{{name}}}"), &value.to_string())
        })
    }

    /// Render a validation issue with `{min}`, `{max}` and `{label}` filled in.
    pub fn issue(&self, issue: &ValidationIssue) -> String {
        match issue {
            ValidationIssue::PoolBounds {
                label_key,
                message_key,
                min,
                max,
                ..
            } => {
                let label = self.t(label_key, &[]);
                self.t(message_key, &[("min", min), ("max", max), ("label", &label)])
            }
            ValidationIssue::InvalidTotal { message_key } => self.t(message_key, &[]),
        }
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

fn builtin_table(locale: Locale) -> Table {
    let raw = match locale {
        Locale::En => include_str!("../locales/en.json"),
        Locale::Zh => include_str!("../locales/zh.json"),
        Locale::Ko => include_str!("../locales/ko.json"),
    };
    serde_json::from_str(raw).unwrap_or_else(|err| {
        warn!(%locale, %err, "bundled translations failed to parse");
        Table::new()
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::double_color::{BetType, DoubleColorPicker};

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("zh-CN"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("KO_kr"), Some(Locale::Ko));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_lookup_by_locale() {
        let mut translator = Translator::new(Locale::En);
        assert_eq!(translator.t("purchase.mode.single", &[]), "Single");
        translator.set_locale(Locale::Zh);
        assert_eq!(translator.t("purchase.mode.single", &[]), "单式");
        translator.set_locale(Locale::Ko);
        assert_eq!(translator.t("purchase.mode.single", &[]), "단식");
    }

    #[test]
    fn test_fallback_chain() {
        let mut translator = Translator::empty(Locale::Ko);
        translator
            .extend_from_json(Locale::En, r#"{"greeting": "Hello {name}"}"#)
            .unwrap();
        assert_eq!(translator.t("greeting", &[("name", &"Mina")]), "Hello Mina");
        assert_eq!(translator.t("missing.key", &[]), "missing.key");

        translator
            .extend_from_json(Locale::Ko, r#"{"greeting": "안녕하세요 {name}"}"#)
            .unwrap();
        assert_eq!(translator.t("greeting", &[("name", &"Mina")]), "안녕하세요 Mina");
    }

    #[test]
    fn test_placeholders() {
        let translator = Translator::new(Locale::En);
        assert_eq!(
            translator.t("purchase.games.preview.overflow", &[("count", &12), ("total", &50)]),
            "Showing first 12 tickets out of 50."
        );
        // Unknown placeholders are left as written.
        assert_eq!(
            translator.t("purchase.games.totalTickets", &[]),
            "{count} tickets"
        );
    }

    #[test]
    fn test_extend_rejects_bad_json() {
        let mut translator = Translator::empty(Locale::En);
        assert_eq!(
            translator.extend_from_json(Locale::En, "[1, 2]"),
            Err(LottoError::Deserialization)
        );
    }

    #[test]
    fn test_bundled_tables_share_keys() {
        let translator = Translator::new(Locale::En);
        let english = &translator.tables[&Locale::En];
        assert!(!english.is_empty());
        for locale in [Locale::Zh, Locale::Ko] {
            let table = &translator.tables[&locale];
            for key in english.keys() {
                assert!(table.contains_key(key), "{locale} is missing {key}");
            }
        }
    }

    #[test]
    fn test_catalog_keys_are_translated() {
        let translator = Translator::new(Locale::En);
        for game in Catalog::builtin().games() {
            for key in [game.name_key(), game.description_key(), game.hint_key()] {
                assert_ne!(translator.t(key, &[]), key);
            }
            for pool in game.pools() {
                assert_ne!(translator.t(&pool.label_key, &[]), pool.label_key);
            }
            for mode in game.modes() {
                assert_ne!(translator.t(&mode.label_key, &[]), mode.label_key);
                assert_ne!(translator.t(&mode.helper_key, &[]), mode.helper_key);
                for key in mode.error_keys.values() {
                    assert_ne!(&translator.t(key, &[]), key);
                }
            }
        }
    }

    #[test]
    fn test_issue_rendering() {
        let translator = Translator::new(Locale::En);
        let mut picker =
            DoubleColorPicker::with_rng(&Catalog::builtin(), StdRng::seed_from_u64(1)).unwrap();
        picker.set_bet_type(BetType::FullMulti);
        let issue = picker.validation().unwrap();
        assert_eq!(translator.issue(&issue), "Select 7-20 red balls.");

        let issue = ValidationIssue::PoolBounds {
            pool_id: PoolId::from("blue"),
            label_key: "purchase.games.doubleColor.pools.blue".into(),
            message_key: "purchase.validation.pool".into(),
            min: 2,
            max: 16,
            selected: 0,
        };
        assert_eq!(translator.issue(&issue), "Blue balls: select 2-16 numbers.");
    }
}
