//! Generic create, edit and delete dialog schemas

use super::{DeleteOptions, DeleteRequest, EntityPatch, FormDraft, FormSchema};
use crate::core::{EntityId, Identified};
use serde::Serialize;
use std::marker::PhantomData;

/// Sentinel phrase typed to confirm destructive deletions
pub const DELETE_CONFIRMATION_PHRASE: &str = "supprimer";

/// Editable projection of an entity
///
/// `Default` provides the documented per-field defaults of a "new" dialog;
/// `from_entity` is the single place optional entity fields are normalized.
pub trait EntityDraft: FormDraft + Default + Serialize {
    type Entity: Identified + Clone + PartialEq;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Required fields are present
    fn is_complete(&self) -> bool;

    fn into_entity(self, id: EntityId) -> Self::Entity;

    /// Overwrite the entity's editable fields with this draft
    fn apply_to(self, entity: &mut Self::Entity);

    /// The change should be announced to the entity's participants
    fn notifies_participants(&self) -> bool {
        false
    }
}

/// "New" dialog: optional template entity, outputs the bare draft
pub struct CreateForm<D>(PhantomData<D>);

impl<D: EntityDraft> FormSchema for CreateForm<D> {
    type Entity = D::Entity;
    type Draft = D;
    type Output = D;

    const REQUIRES_ENTITY: bool = false;

    fn seed(entity: Option<&D::Entity>) -> D {
        entity.map_or_else(D::default, D::from_entity)
    }

    fn is_submittable(draft: &D, _entity: Option<&D::Entity>) -> bool {
        draft.is_complete()
    }

    fn finish(draft: D, _entity: Option<&D::Entity>) -> Option<D> {
        Some(draft)
    }
}

/// "Edit" dialog: seeded from the selected entity, outputs an [`EntityPatch`]
pub struct EditForm<D>(PhantomData<D>);

impl<D: EntityDraft> FormSchema for EditForm<D> {
    type Entity = D::Entity;
    type Draft = D;
    type Output = EntityPatch<D>;

    const REQUIRES_ENTITY: bool = true;

    fn seed(entity: Option<&D::Entity>) -> D {
        entity.map_or_else(D::default, D::from_entity)
    }

    fn is_submittable(draft: &D, entity: Option<&D::Entity>) -> bool {
        entity.is_some() && draft.is_complete()
    }

    fn finish(draft: D, entity: Option<&D::Entity>) -> Option<EntityPatch<D>> {
        entity.map(|entity| EntityPatch {
            id: entity.id(),
            fields: draft,
        })
    }
}

/// How a deletion has to be confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationRule {
    /// No typed confirmation
    None,
    /// Case-insensitive match against a fixed phrase
    Phrase(&'static str),
    /// Exact match against the entity's display name
    DisplayName,
}

impl ConfirmationRule {
    pub fn accepts<E: Identified>(&self, typed: &str, entity: &E) -> bool {
        match self {
            ConfirmationRule::None => true,
            ConfirmationRule::Phrase(phrase) => typed.to_lowercase() == phrase.to_lowercase(),
            ConfirmationRule::DisplayName => typed == entity.display_name(),
        }
    }
}

/// An entity that can be removed from its management page
pub trait Deletable: Identified {
    fn confirmation_rule(&self) -> ConfirmationRule;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDraft {
    pub confirmation: String,
    pub archive_data: bool,
    pub notify_participants: bool,
}

impl Default for DeleteDraft {
    fn default() -> Self {
        let options = DeleteOptions::default();
        Self {
            confirmation: String::new(),
            archive_data: options.archive_data,
            notify_participants: options.notify_participants,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteField {
    Confirmation(String),
    ArchiveData(bool),
    NotifyParticipants(bool),
}

impl FormDraft for DeleteDraft {
    type Field = DeleteField;

    fn apply(&mut self, field: DeleteField) {
        match field {
            DeleteField::Confirmation(text) => self.confirmation = text,
            DeleteField::ArchiveData(value) => self.archive_data = value,
            DeleteField::NotifyParticipants(value) => self.notify_participants = value,
        }
    }
}

/// Confirmation dialog for deleting the selected entity
pub struct DeleteForm<E>(PhantomData<E>);

impl<E: Deletable + Clone + PartialEq> FormSchema for DeleteForm<E> {
    type Entity = E;
    type Draft = DeleteDraft;
    type Output = DeleteRequest;

    const REQUIRES_ENTITY: bool = true;

    fn seed(_entity: Option<&E>) -> DeleteDraft {
        DeleteDraft::default()
    }

    fn is_submittable(draft: &DeleteDraft, entity: Option<&E>) -> bool {
        entity.map_or(false, |entity| {
            entity
                .confirmation_rule()
                .accepts(&draft.confirmation, entity)
        })
    }

    fn finish(draft: DeleteDraft, entity: Option<&E>) -> Option<DeleteRequest> {
        entity.map(|entity| DeleteRequest {
            id: entity.id(),
            options: DeleteOptions {
                archive_data: draft.archive_data,
                notify_participants: draft.notify_participants,
            },
        })
    }
}
