//! Values that are either language-invariant or carry one text per language

use super::Language;
use serde::{Deserialize, Serialize};

/// Order in which languages are tried after the active one
pub const FALLBACK_ORDER: [Language; 3] = [Language::Fr, Language::En, Language::De];

/// One optional text per supported language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(fr: &str, de: &str, en: &str) -> Self {
        Self {
            fr: Some(fr.to_string()),
            de: Some(de.to_string()),
            en: Some(en.to_string()),
        }
    }

    /// Entry for `lang`; empty strings count as missing
    pub fn get(&self, lang: Language) -> Option<&str> {
        let entry = match lang {
            Language::Fr => &self.fr,
            Language::De => &self.de,
            Language::En => &self.en,
        };
        entry.as_deref().filter(|text| !text.is_empty())
    }

    pub fn set(&mut self, lang: Language, text: String) {
        let entry = match lang {
            Language::Fr => &mut self.fr,
            Language::De => &mut self.de,
            Language::En => &mut self.en,
        };
        *entry = Some(text);
    }

    /// Active language first, then French, English, German, then ""
    pub fn resolve(&self, lang: Language) -> &str {
        std::iter::once(lang)
            .chain(FALLBACK_ORDER)
            .find_map(|candidate| self.get(candidate))
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        FALLBACK_ORDER.iter().all(|lang| self.get(*lang).is_none())
    }
}

/// Display text that may or may not depend on the active language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    Plain(String),
    Localized(LocalizedText),
}

impl LocalizedString {
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Localized(text) => text.resolve(lang),
        }
    }

    /// Text in the platform's primary locale, following the fixed fallback chain
    pub fn primary_text(&self) -> &str {
        self.resolve(Language::Fr)
    }

    /// Per-language view; plain strings land in the French slot
    pub fn to_localized_text(&self) -> LocalizedText {
        match self {
            Self::Plain(text) => LocalizedText {
                fr: Some(text.clone()),
                ..LocalizedText::default()
            },
            Self::Localized(text) => text.clone(),
        }
    }
}

impl From<&str> for LocalizedString {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<LocalizedText> for LocalizedString {
    fn from(text: LocalizedText) -> Self {
        Self::Localized(text)
    }
}
