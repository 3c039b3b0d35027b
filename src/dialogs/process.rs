//! Process create/edit/delete dialogs

use crate::core::{EntityId, Process, ProcessPhase, ProcessStatus};
use crate::form::{
    is_filled, non_empty, ConfirmationRule, Deletable, EntityDraft, FormDraft,
    DELETE_CONFIRMATION_PHRASE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDraft {
    pub title: String,
    pub description: String,
    pub status: ProcessStatus,
    pub phase: ProcessPhase,
    pub theme_id: Option<EntityId>,
    pub start_date: String,
    pub end_date: String,
    /// Opt-in announcement of the change to participants
    pub notify_participants: bool,
}

#[derive(Debug, Clone)]
pub enum ProcessField {
    Title(String),
    Description(String),
    Status(ProcessStatus),
    Phase(ProcessPhase),
    ThemeId(Option<EntityId>),
    StartDate(String),
    EndDate(String),
    NotifyParticipants(bool),
}

impl FormDraft for ProcessDraft {
    type Field = ProcessField;

    fn apply(&mut self, field: ProcessField) {
        match field {
            ProcessField::Title(value) => self.title = value,
            ProcessField::Description(value) => self.description = value,
            ProcessField::Status(value) => self.status = value,
            ProcessField::Phase(value) => self.phase = value,
            ProcessField::ThemeId(value) => self.theme_id = value,
            ProcessField::StartDate(value) => self.start_date = value,
            ProcessField::EndDate(value) => self.end_date = value,
            ProcessField::NotifyParticipants(value) => self.notify_participants = value,
        }
    }
}

impl EntityDraft for ProcessDraft {
    type Entity = Process;

    fn from_entity(process: &Process) -> Self {
        Self {
            title: process.title.clone(),
            description: process.description.clone().unwrap_or_default(),
            status: process.status.unwrap_or_default(),
            phase: process.phase.unwrap_or_default(),
            theme_id: process.theme_id,
            start_date: process.start_date.clone().unwrap_or_default(),
            end_date: process.end_date.clone().unwrap_or_default(),
            notify_participants: false,
        }
    }

    fn is_complete(&self) -> bool {
        is_filled(&self.title)
    }

    fn into_entity(self, id: EntityId) -> Process {
        let mut process = Process::new(id, "");
        self.apply_to(&mut process);
        process
    }

    fn notifies_participants(&self) -> bool {
        self.notify_participants
    }

    fn apply_to(self, process: &mut Process) {
        process.title = self.title;
        process.description = non_empty(self.description);
        process.status = Some(self.status);
        process.phase = Some(self.phase);
        process.theme_id = self.theme_id;
        process.start_date = non_empty(self.start_date);
        process.end_date = non_empty(self.end_date);
    }
}

impl Deletable for Process {
    fn confirmation_rule(&self) -> ConfirmationRule {
        ConfirmationRule::Phrase(DELETE_CONFIRMATION_PHRASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_normalizes_missing_fields() {
        let draft = ProcessDraft::from_entity(&Process::new(3, "Parc des Bastions"));
        assert_eq!(draft.title, "Parc des Bastions");
        assert_eq!(draft.description, "");
        assert_eq!(draft.status, ProcessStatus::Draft);
        assert_eq!(draft.phase, ProcessPhase::Preparation);
        assert_eq!(draft.start_date, "");
    }

    #[test]
    fn test_apply_keeps_participant_count() {
        let mut process = Process {
            participants: Some(412),
            ..Process::new(3, "Parc des Bastions")
        };
        let mut draft = ProcessDraft::from_entity(&process);
        draft.apply(ProcessField::Status(ProcessStatus::Closed));
        draft.apply(ProcessField::EndDate("2025-06-30".to_string()));
        draft.apply_to(&mut process);

        assert_eq!(process.status, Some(ProcessStatus::Closed));
        assert_eq!(process.end_date.as_deref(), Some("2025-06-30"));
        assert_eq!(process.description, None);
        assert_eq!(process.participants, Some(412));
    }

    #[test]
    fn test_into_entity() {
        let draft = ProcessDraft {
            title: "V\u{00E9}lo en ville".to_string(),
            phase: ProcessPhase::Vote,
            ..ProcessDraft::default()
        };
        let process = draft.into_entity(9);
        assert_eq!(process.id, 9);
        assert_eq!(process.title, "V\u{00E9}lo en ville");
        assert_eq!(process.phase, Some(ProcessPhase::Vote));
        assert_eq!(process.status, Some(ProcessStatus::Draft));
    }

    #[test]
    fn test_notify_flag_reaches_edit_patch_only() {
        let mut draft = ProcessDraft::from_entity(&Process::new(3, "Parc des Bastions"));
        assert!(!draft.notifies_participants());

        draft.apply(ProcessField::NotifyParticipants(true));
        assert!(draft.notifies_participants());

        let patch = crate::form::EntityPatch { id: 3, fields: draft };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["notifyParticipants"], true);

        let mut process = Process::new(3, "Parc des Bastions");
        patch.fields.apply_to(&mut process);
        assert_eq!(process, Process {
            status: Some(ProcessStatus::Draft),
            phase: Some(ProcessPhase::Preparation),
            ..Process::new(3, "Parc des Bastions")
        });
    }
}
