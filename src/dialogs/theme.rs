//! Theme dialogs with trilingual name and description

use crate::core::{EntityId, Theme};
use crate::form::{
    is_filled, non_empty, ConfirmationRule, Deletable, EntityDraft, FormDraft,
    DELETE_CONFIRMATION_PHRASE,
};
use crate::i18n::{Language, LocalizedString, LocalizedText};
use serde::{Deserialize, Serialize};

const DEFAULT_THEME_COLOR: &str = "#2563eb";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDraft {
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub color: String,
    pub icon: String,
}

impl Default for ThemeDraft {
    fn default() -> Self {
        Self {
            name: LocalizedText::default(),
            description: LocalizedText::default(),
            color: DEFAULT_THEME_COLOR.to_string(),
            icon: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ThemeField {
    Name(Language, String),
    Description(Language, String),
    Color(String),
    Icon(String),
}

impl FormDraft for ThemeDraft {
    type Field = ThemeField;

    fn apply(&mut self, field: ThemeField) {
        match field {
            ThemeField::Name(lang, value) => self.name.set(lang, value),
            ThemeField::Description(lang, value) => self.description.set(lang, value),
            ThemeField::Color(value) => self.color = value,
            ThemeField::Icon(value) => self.icon = value,
        }
    }
}

impl EntityDraft for ThemeDraft {
    type Entity = Theme;

    fn from_entity(theme: &Theme) -> Self {
        Self {
            name: theme.name.to_localized_text(),
            description: theme
                .description
                .as_ref()
                .map(LocalizedString::to_localized_text)
                .unwrap_or_default(),
            color: theme
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
            icon: theme.icon.clone().unwrap_or_default(),
        }
    }

    /// French is the primary locale and must always be named
    fn is_complete(&self) -> bool {
        self.name.get(Language::Fr).map_or(false, is_filled)
    }

    fn into_entity(self, id: EntityId) -> Theme {
        Theme {
            id,
            name: LocalizedString::Localized(self.name),
            description: if self.description.is_empty() {
                None
            } else {
                Some(LocalizedString::Localized(self.description))
            },
            color: non_empty(self.color),
            icon: non_empty(self.icon),
        }
    }

    fn apply_to(self, theme: &mut Theme) {
        *theme = self.into_entity(theme.id);
    }
}

impl Deletable for Theme {
    fn confirmation_rule(&self) -> ConfirmationRule {
        ConfirmationRule::Phrase(DELETE_CONFIRMATION_PHRASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_seeds_french() {
        let theme = Theme {
            id: 1,
            name: LocalizedString::from("Environnement"),
            description: None,
            color: None,
            icon: None,
        };
        let draft = ThemeDraft::from_entity(&theme);
        assert_eq!(draft.name.get(Language::Fr), Some("Environnement"));
        assert_eq!(draft.name.get(Language::De), None);
        assert_eq!(draft.color, DEFAULT_THEME_COLOR);
        assert!(draft.is_complete());
    }

    #[test]
    fn test_french_name_is_required() {
        let mut draft = ThemeDraft::default();
        draft.apply(ThemeField::Name(Language::De, "Umwelt".to_string()));
        assert!(!draft.is_complete());
        draft.apply(ThemeField::Name(Language::Fr, "Environnement".to_string()));
        assert!(draft.is_complete());
    }

    #[test]
    fn test_into_entity_drops_empty_description() {
        let mut draft = ThemeDraft::default();
        draft.apply(ThemeField::Name(Language::Fr, "Culture".to_string()));
        let theme = draft.into_entity(4);
        assert_eq!(theme.description, None);
        assert_eq!(theme.name.resolve(Language::En), "Culture");
    }
}
