//! Process result publication dialogs

use crate::core::{EntityId, ProcessResult, PublishMode};
use crate::form::{is_filled, non_empty, ConfirmationRule, Deletable, EntityDraft, FormDraft};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDraft {
    pub title: String,
    pub summary: String,
    pub process_id: Option<EntityId>,
    pub publish_mode: PublishMode,
    pub scheduled_publish_date: String,
}

#[derive(Debug, Clone)]
pub enum ResultField {
    Title(String),
    Summary(String),
    ProcessId(Option<EntityId>),
    PublishMode(PublishMode),
    ScheduledPublishDate(String),
}

impl FormDraft for ResultDraft {
    type Field = ResultField;

    fn apply(&mut self, field: ResultField) {
        match field {
            ResultField::Title(value) => self.title = value,
            ResultField::Summary(value) => self.summary = value,
            ResultField::ProcessId(value) => self.process_id = value,
            ResultField::PublishMode(value) => self.publish_mode = value,
            ResultField::ScheduledPublishDate(value) => self.scheduled_publish_date = value,
        }
    }
}

impl EntityDraft for ResultDraft {
    type Entity = ProcessResult;

    fn from_entity(result: &ProcessResult) -> Self {
        Self {
            title: result.title.clone(),
            summary: result.summary.clone().unwrap_or_default(),
            process_id: result.process_id,
            publish_mode: result.publish_mode.unwrap_or_default(),
            scheduled_publish_date: result.scheduled_publish_date.clone().unwrap_or_default(),
        }
    }

    /// A scheduled publication needs its date
    fn is_complete(&self) -> bool {
        is_filled(&self.title)
            && (self.publish_mode == PublishMode::Immediate
                || is_filled(&self.scheduled_publish_date))
    }

    fn into_entity(self, id: EntityId) -> ProcessResult {
        let scheduled_publish_date = match self.publish_mode {
            PublishMode::Immediate => None,
            PublishMode::Scheduled => non_empty(self.scheduled_publish_date),
        };

        ProcessResult {
            id,
            title: self.title,
            process_id: self.process_id,
            summary: non_empty(self.summary),
            publish_mode: Some(self.publish_mode),
            scheduled_publish_date,
        }
    }

    fn apply_to(self, result: &mut ProcessResult) {
        *result = self.into_entity(result.id);
    }
}

impl Deletable for ProcessResult {
    fn confirmation_rule(&self) -> ConfirmationRule {
        ConfirmationRule::None
    }
}
