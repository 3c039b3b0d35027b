//! Entity-bound form controller
//!
//! Every create, edit and delete dialog follows the same lifecycle:
//! open, seed a draft from the selected entity (or defaults), edit fields
//! one at a time, then either submit a single payload or cancel. Both exits
//! close the dialog and reset the draft.
//!
//! A dialog is a [`FormController`] configured by a [`FormSchema`], which
//! supplies the draft shape, the seeding rule, the submit-validity predicate
//! and the payload built on submit.

mod controller;
mod payload;
mod schema;

pub use controller::{FormController, FormState};
pub use payload::{DeleteOptions, DeleteRequest, EntityPatch};
pub use schema::{
    ConfirmationRule, CreateForm, Deletable, DeleteDraft, DeleteField, DeleteForm, EditForm,
    EntityDraft, DELETE_CONFIRMATION_PHRASE,
};

use std::fmt::Debug;

/// Dialog-local scratch state, mutated one field at a time
pub trait FormDraft: Clone + Debug {
    /// A single field assignment
    type Field;

    fn apply(&mut self, field: Self::Field);
}

/// Configuration of one kind of dialog
pub trait FormSchema {
    type Entity: Clone + PartialEq;
    type Draft: FormDraft;
    type Output;

    /// Edit and delete dialogs render nothing without a selected entity
    const REQUIRES_ENTITY: bool;

    /// Draft for a freshly opened dialog; `None` yields the defaults
    fn seed(entity: Option<&Self::Entity>) -> Self::Draft;

    fn is_submittable(draft: &Self::Draft, entity: Option<&Self::Entity>) -> bool;

    /// Payload handed to the caller; `None` only when a required entity is missing
    fn finish(draft: Self::Draft, entity: Option<&Self::Entity>) -> Option<Self::Output>;
}

/// Trimmed text is non-empty
pub(crate) fn is_filled(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Empty text becomes `None`
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
