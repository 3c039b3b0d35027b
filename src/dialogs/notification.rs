//! Notification template dialogs of the operator console

use crate::core::{EntityId, NotificationChannel, NotificationTemplate};
use crate::form::{is_filled, ConfirmationRule, Deletable, EntityDraft, FormDraft};
use crate::i18n::{Language, LocalizedString, LocalizedText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    pub name: String,
    pub channel: NotificationChannel,
    pub subject: LocalizedText,
    pub body: LocalizedText,
    pub active: bool,
}

impl Default for TemplateDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            channel: NotificationChannel::default(),
            subject: LocalizedText::default(),
            body: LocalizedText::default(),
            active: true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TemplateField {
    Name(String),
    Channel(NotificationChannel),
    Subject(Language, String),
    Body(Language, String),
    Active(bool),
}

impl FormDraft for TemplateDraft {
    type Field = TemplateField;

    fn apply(&mut self, field: TemplateField) {
        match field {
            TemplateField::Name(value) => self.name = value,
            TemplateField::Channel(value) => self.channel = value,
            TemplateField::Subject(lang, value) => self.subject.set(lang, value),
            TemplateField::Body(lang, value) => self.body.set(lang, value),
            TemplateField::Active(value) => self.active = value,
        }
    }
}

fn localized_or_default(value: Option<&LocalizedString>) -> LocalizedText {
    value
        .map(LocalizedString::to_localized_text)
        .unwrap_or_default()
}

impl EntityDraft for TemplateDraft {
    type Entity = NotificationTemplate;

    fn from_entity(template: &NotificationTemplate) -> Self {
        Self {
            name: template.name.clone(),
            channel: template.channel.unwrap_or_default(),
            subject: localized_or_default(template.subject.as_ref()),
            body: localized_or_default(template.body.as_ref()),
            active: template.active.unwrap_or(true),
        }
    }

    fn is_complete(&self) -> bool {
        is_filled(&self.name) && self.subject.get(Language::Fr).map_or(false, is_filled)
    }

    fn into_entity(self, id: EntityId) -> NotificationTemplate {
        NotificationTemplate {
            id,
            name: self.name,
            channel: Some(self.channel),
            subject: Some(LocalizedString::Localized(self.subject)),
            body: Some(LocalizedString::Localized(self.body)),
            active: Some(self.active),
        }
    }

    fn apply_to(self, template: &mut NotificationTemplate) {
        *template = self.into_entity(template.id);
    }
}

impl Deletable for NotificationTemplate {
    fn confirmation_rule(&self) -> ConfirmationRule {
        ConfirmationRule::DisplayName
    }
}
