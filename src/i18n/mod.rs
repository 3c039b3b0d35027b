//! Internationalization module
//!
//! Provides the French (fr), German (de) and English (en) string tables and
//! the resolver every page and dialog renders text through. French is the
//! platform's primary locale and the first fallback for localized content.
//!
//! Lookups never fail: a missing translation key renders as the key itself,
//! a missing localized entry falls back through French, English and German.

mod de;
mod en;
mod fr;
mod localized;

pub use localized::{LocalizedString, LocalizedText, FALLBACK_ORDER};

use crate::core::{Error, GeneralConfig, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock, RwLock};

/// Supported interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fr, Language::De, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Name of the language in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Fr => "Fran\u{00E7}ais",
            Language::De => "Deutsch",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts bare codes as well as locale strings like "de_CH.UTF-8" or "fr-CH"
    fn from_str(s: &str) -> Result<Self> {
        let code = s
            .split(|c: char| c == '_' || c == '-' || c == '.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match code.as_str() {
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Get available languages
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    Language::ALL
        .iter()
        .map(|lang| (lang.code(), lang.native_name()))
        .collect()
}

/// Detect the system language from the locale environment, defaulting to French
pub fn detect_system_language() -> Language {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_default();

    lang_env.parse().unwrap_or_default()
}

/// Static key to trilingual text table
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, LocalizedText>,
}

impl TranslationTable {
    /// Build a table from per-language key/text pairs
    pub fn from_languages<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Language, HashMap<&'a str, &'a str>)>,
    {
        let mut entries: HashMap<String, LocalizedText> = HashMap::new();
        for (lang, table) in tables {
            for (key, text) in table {
                entries
                    .entry(key.to_string())
                    .or_default()
                    .set(lang, text.to_string());
            }
        }
        Self { entries }
    }

    /// The platform's built-in strings, built once per process
    pub fn builtin() -> Arc<TranslationTable> {
        static BUILTIN: OnceLock<Arc<TranslationTable>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Arc::new(Self::from_languages([
                    (Language::Fr, fr::get_translations()),
                    (Language::De, de::get_translations()),
                    (Language::En, en::get_translations()),
                ]))
            })
            .clone()
    }

    pub fn insert(&mut self, key: &str, text: LocalizedText) {
        self.entries.insert(key.to_string(), text);
    }

    pub fn get(&self, key: &str) -> Option<&LocalizedText> {
        self.entries.get(key)
    }

    /// Text for `key` in `lang`, or the key itself when no entry exists
    pub fn translate<'a>(&'a self, key: &'a str, lang: Language) -> &'a str {
        self.entries
            .get(key)
            .and_then(|text| text.get(lang))
            .unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys without an entry for `lang`, sorted
    pub fn missing_keys(&self, lang: Language) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, text)| text.get(lang).is_none())
            .map(|(key, _)| key.as_str())
            .collect();
        missing.sort_unstable();
        missing
    }
}

/// Shared handle on the active language and the translation table
///
/// Created once at the application root and cloned into every page and
/// dialog; all clones observe `set_language` immediately.
#[derive(Debug, Clone)]
pub struct LanguageContext {
    current: Arc<RwLock<Language>>,
    table: Arc<TranslationTable>,
}

impl LanguageContext {
    /// Context over the built-in table
    pub fn new(lang: Language) -> Self {
        Self {
            current: Arc::new(RwLock::new(lang)),
            table: TranslationTable::builtin(),
        }
    }

    pub fn with_table(table: TranslationTable, lang: Language) -> Self {
        Self {
            current: Arc::new(RwLock::new(lang)),
            table: Arc::new(table),
        }
    }

    /// Context whose initial language comes from configuration ("auto" detects the locale)
    pub fn from_config(config: &GeneralConfig) -> Self {
        let lang = if config.language == "auto" {
            detect_system_language()
        } else {
            config.language.parse().unwrap_or_else(|e| {
                log::warn!("{}, falling back to {}", e, Language::default());
                Language::default()
            })
        };
        Self::new(lang)
    }

    /// Get the current language
    pub fn language(&self) -> Language {
        *self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Set the current language
    pub fn set_language(&self, lang: Language) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = lang;
        log::info!("Language set to: {}", lang);
    }

    /// Get a translated string by key
    pub fn translate(&self, key: &str) -> String {
        self.table.translate(key, self.language()).to_string()
    }

    /// Display text for an optional localized value
    pub fn resolve_localized(&self, value: Option<&LocalizedString>) -> String {
        value
            .map(|value| value.resolve(self.language()).to_string())
            .unwrap_or_default()
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
