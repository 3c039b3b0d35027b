//! Payloads emitted by dialogs and consumed by the persistence port

use crate::core::EntityId;
use serde::{Deserialize, Serialize};

/// Full draft of an edited entity, tagged with the entity's id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPatch<D> {
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: D,
}

/// What to do with data attached to a deleted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptions {
    /// Keep the record out of sight instead of erasing it
    pub archive_data: bool,
    pub notify_participants: bool,
}

impl Default for DeleteOptions {
    fn default() -> Self {
        Self {
            archive_data: true,
            notify_participants: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: EntityId,
    pub options: DeleteOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TitleDraft {
        title: String,
        is_public: bool,
    }

    #[test]
    fn test_patch_flattens_draft_next_to_id() {
        let patch = EntityPatch {
            id: 7,
            fields: TitleDraft {
                title: "Plan climat".to_string(),
                is_public: true,
            },
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"id": 7, "title": "Plan climat", "isPublic": true})
        );
    }

    #[test]
    fn test_delete_request_shape() {
        let request = DeleteRequest {
            id: 3,
            options: DeleteOptions::default(),
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"id": 3, "options": {"archiveData": true, "notifyParticipants": false}})
        );
    }
}
