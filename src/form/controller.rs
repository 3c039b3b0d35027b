//! Open/seed/edit/submit lifecycle shared by every dialog

use super::{FormDraft, FormSchema};
use std::fmt;
use std::marker::PhantomData;

/// Dialog lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    /// Open, draft freshly seeded
    Seeded,
    /// Open, at least one field changed since seeding
    Edited,
}

/// A dialog bound to an optional entity
///
/// The controller keeps its own copy of the entity it was opened with so the
/// page can keep mutating its list; `sync_entity` propagates selection changes.
pub struct FormController<S: FormSchema> {
    state: FormState,
    entity: Option<S::Entity>,
    draft: S::Draft,
    _schema: PhantomData<S>,
}

impl<S: FormSchema> FormController<S> {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            entity: None,
            draft: S::seed(None),
            _schema: PhantomData,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    /// Open and, for entity-bound dialogs, holding an entity
    pub fn is_visible(&self) -> bool {
        self.is_open() && (!S::REQUIRES_ENTITY || self.entity.is_some())
    }

    pub fn entity(&self) -> Option<&S::Entity> {
        self.entity.as_ref()
    }

    /// Current draft, only while the dialog is visible
    pub fn draft(&self) -> Option<&S::Draft> {
        self.is_visible().then_some(&self.draft)
    }

    /// Open the dialog and seed its draft
    ///
    /// Entity-bound dialogs opened without an entity stay closed.
    pub fn open(&mut self, entity: Option<&S::Entity>) -> bool {
        if S::REQUIRES_ENTITY && entity.is_none() {
            log::debug!("Ignoring open without a selected entity");
            return false;
        }

        self.seed(entity);
        true
    }

    /// Follow a change of the externally selected entity while open
    pub fn sync_entity(&mut self, entity: Option<&S::Entity>) {
        if !self.is_open() {
            return;
        }

        match entity {
            Some(next) if self.entity.as_ref() != Some(next) => self.seed(Some(next)),
            Some(_) => {}
            None => self.entity = None,
        }
    }

    /// Assign a single draft field
    pub fn set_field(&mut self, field: <S::Draft as FormDraft>::Field) -> bool {
        if !self.is_visible() {
            log::debug!("Ignoring field change on a hidden dialog");
            return false;
        }

        self.draft.apply(field);
        self.state = FormState::Edited;
        true
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_visible() && S::is_submittable(&self.draft, self.entity.as_ref())
    }

    /// Close the dialog and return its payload, if the draft is submittable
    pub fn submit(&mut self) -> Option<S::Output> {
        if !self.can_submit() {
            log::debug!("Submit ignored: draft is not submittable");
            return None;
        }

        let draft = std::mem::replace(&mut self.draft, S::seed(None));
        let entity = self.entity.take();
        self.state = FormState::Closed;

        S::finish(draft, entity.as_ref())
    }

    /// Submit and hand the payload to `on_submit`, which runs at most once
    pub fn submit_with<F, R>(&mut self, on_submit: F) -> Option<R>
    where
        F: FnOnce(S::Output) -> R,
    {
        self.submit().map(on_submit)
    }

    /// Close the dialog and discard the draft
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
        self.entity = None;
        self.draft = S::seed(None);
    }

    fn seed(&mut self, entity: Option<&S::Entity>) {
        self.entity = entity.cloned();
        self.draft = S::seed(entity);
        self.state = FormState::Seeded;
    }
}

impl<S: FormSchema> Default for FormController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for FormController<S>
where
    S: FormSchema,
    S::Entity: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("state", &self.state)
            .field("entity", &self.entity)
            .field("draft", &self.draft)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Process, ProcessPhase, ProcessStatus, User};
    use crate::dialogs::{ProcessDraft, ProcessField, UserDraft};
    use crate::form::{CreateForm, DeleteField, DeleteForm, EditForm};

    fn plan_climat() -> Process {
        Process {
            status: Some(ProcessStatus::Active),
            phase: Some(ProcessPhase::Consultation),
            description: Some("R\u{00E9}duire les \u{00E9}missions".to_string()),
            ..Process::new(1, "Plan climat")
        }
    }

    #[test]
    fn test_starts_closed() {
        let form: FormController<EditForm<ProcessDraft>> = FormController::new();
        assert_eq!(form.state(), FormState::Closed);
        assert!(!form.is_visible());
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_edit_dialog_seeds_from_entity() {
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        assert!(form.open(Some(&plan_climat())));
        assert_eq!(form.state(), FormState::Seeded);

        let draft = form.draft().unwrap();
        assert_eq!(draft.title, "Plan climat");
        assert_eq!(draft.status, ProcessStatus::Active);
        assert_eq!(draft.phase, ProcessPhase::Consultation);
    }

    #[test]
    fn test_new_dialog_seeds_defaults() {
        let mut form: FormController<CreateForm<ProcessDraft>> = FormController::new();
        assert!(form.open(None));

        let draft = form.draft().unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.status, ProcessStatus::Draft);
        assert_eq!(draft.phase, ProcessPhase::Preparation);
        assert!(!draft.notify_participants);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_edit_dialog_without_entity_stays_closed() {
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        assert!(!form.open(None));
        assert_eq!(form.state(), FormState::Closed);
        assert!(!form.set_field(ProcessField::Title("x".to_string())));
    }

    #[test]
    fn test_submit_emits_patch_once_and_resets() {
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        form.open(Some(&plan_climat()));
        assert!(form.set_field(ProcessField::Title("Plan climat 2030".to_string())));
        assert_eq!(form.state(), FormState::Edited);

        let mut calls = Vec::new();
        let outcome = form.submit_with(|patch| calls.push(patch));
        assert!(outcome.is_some());

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, 1);
        assert_eq!(calls[0].fields.title, "Plan climat 2030");
        assert_eq!(calls[0].fields.status, ProcessStatus::Active);
        assert_eq!(
            calls[0].fields.description,
            "R\u{00E9}duire les \u{00E9}missions"
        );

        assert_eq!(form.state(), FormState::Closed);
        assert!(form.entity().is_none());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_invalid_submit_keeps_dialog_open() {
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        form.open(Some(&plan_climat()));
        form.set_field(ProcessField::Title("   ".to_string()));

        let mut called = false;
        assert!(form.submit_with(|_| called = true).is_none());
        assert!(!called);
        assert_eq!(form.state(), FormState::Edited);
        assert_eq!(form.draft().unwrap().title, "   ");
    }

    #[test]
    fn test_cancel_discards_edits_and_reopen_reseeds() {
        let process = plan_climat();
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        form.open(Some(&process));
        form.set_field(ProcessField::Title("Brouillon jet\u{00E9}".to_string()));

        let mut called = false;
        form.cancel();
        assert!(form.submit_with(|_| called = true).is_none());
        assert!(!called);
        assert_eq!(form.state(), FormState::Closed);

        form.open(Some(&process));
        assert_eq!(form.draft().unwrap().title, "Plan climat");
    }

    #[test]
    fn test_entity_change_while_open_reseeds() {
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        form.open(Some(&plan_climat()));
        form.set_field(ProcessField::Title("Modifi\u{00E9}".to_string()));

        let other = Process::new(2, "Budget participatif");
        form.sync_entity(Some(&other));
        assert_eq!(form.state(), FormState::Seeded);
        assert_eq!(form.draft().unwrap().title, "Budget participatif");

        form.set_field(ProcessField::Title("Budget 2025".to_string()));
        form.sync_entity(Some(&other));
        assert_eq!(form.draft().unwrap().title, "Budget 2025");
    }

    #[test]
    fn test_cleared_selection_hides_dialog() {
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        form.open(Some(&plan_climat()));
        form.sync_entity(None);

        assert!(form.is_open());
        assert!(!form.is_visible());
        assert!(form.draft().is_none());
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_sync_is_ignored_while_closed() {
        let mut form: FormController<EditForm<ProcessDraft>> = FormController::new();
        form.sync_entity(Some(&plan_climat()));
        assert_eq!(form.state(), FormState::Closed);
        assert!(form.entity().is_none());
    }

    #[test]
    fn test_process_delete_requires_phrase() {
        let mut form: FormController<DeleteForm<Process>> = FormController::new();
        form.open(Some(&plan_climat()));
        assert!(!form.can_submit());

        for typed in ["supprime", "supprimer ", "delete", ""] {
            form.set_field(DeleteField::Confirmation(typed.to_string()));
            assert!(!form.can_submit(), "{:?} should not confirm", typed);
        }

        for typed in ["SUPPRIMER", "Supprimer", "supprimer"] {
            form.set_field(DeleteField::Confirmation(typed.to_string()));
            assert!(form.can_submit(), "{:?} should confirm", typed);
        }
    }

    #[test]
    fn test_delete_options_defaults_and_payload() {
        let mut form: FormController<DeleteForm<Process>> = FormController::new();
        form.open(Some(&plan_climat()));

        let draft = form.draft().unwrap();
        assert!(draft.archive_data);
        assert!(!draft.notify_participants);

        form.set_field(DeleteField::NotifyParticipants(true));
        form.set_field(DeleteField::Confirmation("Supprimer".to_string()));
        let request = form.submit().unwrap();
        assert_eq!(request.id, 1);
        assert!(request.options.archive_data);
        assert!(request.options.notify_participants);
    }

    #[test]
    fn test_user_delete_requires_exact_name() {
        let user = User {
            id: 5,
            name: "Anna M\u{00FC}ller".to_string(),
            email: "anna@example.ch".to_string(),
            role: None,
            status: None,
            contributions: None,
        };
        let mut form: FormController<DeleteForm<User>> = FormController::new();
        form.open(Some(&user));

        form.set_field(DeleteField::Confirmation("anna m\u{00FC}ller".to_string()));
        assert!(!form.can_submit());
        form.set_field(DeleteField::Confirmation("Anna M\u{00FC}ller".to_string()));
        assert!(form.can_submit());
    }

    #[test]
    fn test_create_dialog_emits_bare_draft() {
        let mut form: FormController<CreateForm<UserDraft>> = FormController::new();
        form.open(None);
        form.set_field(crate::dialogs::UserField::Name("Luca Rossi".to_string()));
        assert!(!form.can_submit());
        form.set_field(crate::dialogs::UserField::Email("luca@example.ch".to_string()));

        let draft = form.submit().unwrap();
        assert_eq!(draft.name, "Luca Rossi");
        assert_eq!(form.state(), FormState::Closed);
    }
}
