//! Calendar event dialogs

use crate::core::{CalendarEvent, EntityId, EventType};
use crate::form::{is_filled, non_empty, ConfirmationRule, Deletable, EntityDraft, FormDraft};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub process_id: Option<EntityId>,
}

#[derive(Debug, Clone)]
pub enum EventField {
    Title(String),
    Description(String),
    Date(String),
    Time(String),
    Location(String),
    Type(EventType),
    ProcessId(Option<EntityId>),
}

impl FormDraft for EventDraft {
    type Field = EventField;

    fn apply(&mut self, field: EventField) {
        match field {
            EventField::Title(value) => self.title = value,
            EventField::Description(value) => self.description = value,
            EventField::Date(value) => self.date = value,
            EventField::Time(value) => self.time = value,
            EventField::Location(value) => self.location = value,
            EventField::Type(value) => self.event_type = value,
            EventField::ProcessId(value) => self.process_id = value,
        }
    }
}

impl EntityDraft for EventDraft {
    type Entity = CalendarEvent;

    fn from_entity(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: event.date.clone(),
            time: event.time.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            event_type: event.event_type.unwrap_or_default(),
            process_id: event.process_id,
        }
    }

    fn is_complete(&self) -> bool {
        is_filled(&self.title) && is_filled(&self.date)
    }

    fn into_entity(self, id: EntityId) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title,
            date: self.date,
            time: non_empty(self.time),
            description: non_empty(self.description),
            location: non_empty(self.location),
            event_type: Some(self.event_type),
            process_id: self.process_id,
        }
    }

    fn apply_to(self, event: &mut CalendarEvent) {
        *event = self.into_entity(event.id);
    }
}

impl Deletable for CalendarEvent {
    fn confirmation_rule(&self) -> ConfirmationRule {
        ConfirmationRule::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_required() {
        let mut draft = EventDraft::default();
        draft.apply(EventField::Title("Atelier mobilit\u{00E9}".to_string()));
        assert!(!draft.is_complete());
        draft.apply(EventField::Date("2025-05-14".to_string()));
        assert!(draft.is_complete());
        assert_eq!(draft.event_type, EventType::Meeting);
    }

    #[test]
    fn test_apply_replaces_editable_fields() {
        let mut event = CalendarEvent {
            id: 2,
            title: "S\u{00E9}ance publique".to_string(),
            date: "2025-05-14".to_string(),
            time: Some("19:00".to_string()),
            description: None,
            location: Some("Salle communale".to_string()),
            event_type: Some(EventType::Workshop),
            process_id: Some(1),
        };
        let mut draft = EventDraft::from_entity(&event);
        draft.apply(EventField::Location(String::new()));
        draft.apply_to(&mut event);

        assert_eq!(event.id, 2);
        assert_eq!(event.location, None);
        assert_eq!(event.time.as_deref(), Some("19:00"));
        assert_eq!(event.event_type, Some(EventType::Workshop));
    }
}
