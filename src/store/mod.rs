//! Persistence port used by the management pages
//!
//! Pages depend on [`Repository`] only, so the in-memory mock data and the
//! SQLite database (see `db`) are interchangeable.

use crate::core::{EntityId, Error, Identified, Result};
use crate::form::{DeleteRequest, EntityDraft, EntityPatch};
use serde::Serialize;

/// Create/update/delete sink for one entity kind, keyed by its draft type
pub trait Repository<D: EntityDraft> {
    fn list(&self) -> Result<Vec<D::Entity>>;

    fn create(&mut self, draft: D) -> Result<D::Entity>;

    fn update(&mut self, patch: EntityPatch<D>) -> Result<D::Entity>;

    fn delete(&mut self, request: DeleteRequest) -> Result<()>;
}

impl<D, R> Repository<D> for &mut R
where
    D: EntityDraft,
    R: Repository<D> + ?Sized,
{
    fn list(&self) -> Result<Vec<D::Entity>> {
        (**self).list()
    }

    fn create(&mut self, draft: D) -> Result<D::Entity> {
        (**self).create(draft)
    }

    fn update(&mut self, patch: EntityPatch<D>) -> Result<D::Entity> {
        (**self).update(patch)
    }

    fn delete(&mut self, request: DeleteRequest) -> Result<()> {
        (**self).delete(request)
    }
}

/// Log a persistence payload as JSON
pub(crate) fn log_payload<P: Serialize>(action: &str, kind: &str, payload: &P) {
    match serde_json::to_string(payload) {
        Ok(json) => log::info!("{} {}: {}", action, kind, json),
        Err(e) => log::warn!("Could not serialize {} payload for {}: {}", action, kind, e),
    }
}

/// Process-lifetime storage over a mock record list
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    records: Vec<E>,
    archived: Vec<E>,
    next_id: EntityId,
}

impl<E: Identified> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records; new ids continue after the highest one
    pub fn with_records(records: Vec<E>) -> Self {
        let next_id = records.iter().map(Identified::id).max().unwrap_or(0) + 1;
        Self {
            records,
            archived: Vec::new(),
            next_id,
        }
    }

    /// Records removed with `archiveData` set
    pub fn archived(&self) -> &[E] {
        &self.archived
    }

    fn position(&self, id: EntityId) -> Result<usize> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(Error::NotFound { kind: E::KIND, id })
    }
}

impl<E: Identified> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EntityDraft> Repository<D> for InMemoryRepository<D::Entity> {
    fn list(&self) -> Result<Vec<D::Entity>> {
        Ok(self.records.clone())
    }

    fn create(&mut self, draft: D) -> Result<D::Entity> {
        let kind = <D::Entity as Identified>::KIND;
        log_payload("create", kind, &draft);

        let entity = draft.into_entity(self.next_id);
        self.next_id += 1;
        self.records.push(entity.clone());
        Ok(entity)
    }

    fn update(&mut self, patch: EntityPatch<D>) -> Result<D::Entity> {
        let kind = <D::Entity as Identified>::KIND;
        log_payload("update", kind, &patch);

        let index = self.position(patch.id)?;
        if patch.fields.notifies_participants() {
            log::info!("Participants of {} #{} will be notified", kind, patch.id);
        }
        let entity = &mut self.records[index];
        patch.fields.apply_to(entity);
        Ok(entity.clone())
    }

    fn delete(&mut self, request: DeleteRequest) -> Result<()> {
        let kind = <D::Entity as Identified>::KIND;
        log_payload("delete", kind, &request);

        let index = self.position(request.id)?;
        let record = self.records.remove(index);
        if request.options.archive_data {
            self.archived.push(record);
        }
        if request.options.notify_participants {
            log::info!("Participants of {} #{} will be notified", kind, request.id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Process;
    use crate::dialogs::ProcessDraft;
    use crate::form::DeleteOptions;

    fn repository() -> InMemoryRepository<Process> {
        InMemoryRepository::with_records(vec![
            Process::new(1, "Plan climat"),
            Process::new(4, "Budget participatif"),
        ])
    }

    #[test]
    fn test_create_continues_ids() {
        let mut repo = repository();
        let draft = ProcessDraft {
            title: "Parc urbain".to_string(),
            ..ProcessDraft::default()
        };
        let created = Repository::<ProcessDraft>::create(&mut repo, draft).unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(Repository::<ProcessDraft>::list(&repo).unwrap().len(), 3);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut repo = repository();
        let patch = EntityPatch {
            id: 42,
            fields: ProcessDraft::default(),
        };
        let err = Repository::<ProcessDraft>::update(&mut repo, patch).unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "process", id: 42 }));
    }

    #[test]
    fn test_delete_archives_when_requested() {
        let mut repo = repository();
        let request = DeleteRequest {
            id: 1,
            options: DeleteOptions::default(),
        };
        Repository::<ProcessDraft>::delete(&mut repo, request).unwrap();
        assert_eq!(repo.archived().len(), 1);

        let request = DeleteRequest {
            id: 4,
            options: DeleteOptions {
                archive_data: false,
                notify_participants: true,
            },
        };
        Repository::<ProcessDraft>::delete(&mut repo, request).unwrap();
        assert_eq!(repo.archived().len(), 1);
        assert!(Repository::<ProcessDraft>::list(&repo).unwrap().is_empty());
    }
}
