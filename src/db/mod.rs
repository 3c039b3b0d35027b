//! Database module for persisting managed entities
//!
//! Uses SQLite for local storage of:
//! - Entity records (JSON payloads keyed by kind and id)
//! - The audit log shown in the operator console

use crate::core::{EntityId, Error, Identified, Result};
use crate::form::{DeleteRequest, EntityDraft, EntityPatch};
use crate::store::{log_payload, Repository};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Database manager
pub struct Database {
    conn: Connection,
}

/// Audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub timestamp: i64,
    pub kind: String,
    pub entity_id: EntityId,
    pub action: String,
}

impl Database {
    /// Open (or create) a database file
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        log::info!("Opened database at {}", path.display());

        let db = Self { conn };
        db.init_schema()?;

        Ok(db)
    }

    /// Database living for the lifetime of the process
    pub fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.init_schema()?;

        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            -- Managed entities
            CREATE TABLE IF NOT EXISTS records (
                kind TEXT NOT NULL,
                id INTEGER NOT NULL,
                payload TEXT NOT NULL,
                archived INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (kind, id)
            );

            -- Every create/update/delete
            CREATE TABLE IF NOT EXISTS audit_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp INTEGER NOT NULL,
                kind TEXT NOT NULL,
                entity_id INTEGER NOT NULL,
                action TEXT NOT NULL
            );

            -- Indexes
            CREATE INDEX IF NOT EXISTS idx_audit_timestamp ON audit_log(timestamp);
            "#,
        )?;

        Ok(())
    }

    /// Insert records as they are, e.g. mock data for a fresh database
    pub fn import<E: Identified + Serialize>(&self, records: &[E]) -> Result<usize> {
        let mut count = 0;
        for record in records {
            let payload = to_json(record)?;
            count += self.conn.execute(
                "INSERT OR IGNORE INTO records (kind, id, payload) VALUES (?1, ?2, ?3)",
                params![E::KIND, sql_id(record.id())?, payload],
            )?;
        }
        Ok(count)
    }

    /// Most recent audit entries first
    pub fn audit_entries(&self, limit: Option<u32>) -> Result<Vec<AuditEntry>> {
        let query = match limit {
            Some(n) => format!(
                "SELECT id, timestamp, kind, entity_id, action
                 FROM audit_log ORDER BY id DESC LIMIT {}",
                n
            ),
            None => "SELECT id, timestamp, kind, entity_id, action
                     FROM audit_log ORDER BY id DESC"
                .to_string(),
        };

        let mut stmt = self.conn.prepare(&query)?;

        let entries = stmt
            .query_map([], |row| {
                Ok(AuditEntry {
                    id: row.get(0)?,
                    timestamp: row.get(1)?,
                    kind: row.get(2)?,
                    entity_id: {
                        let raw: i64 = row.get(3)?;
                        EntityId::try_from(raw)
                            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(3, raw))?
                    },
                    action: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn record_audit(&self, kind: &str, entity_id: EntityId, action: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO audit_log (timestamp, kind, entity_id, action) VALUES (?1, ?2, ?3, ?4)",
            params![chrono::Utc::now().timestamp(), kind, sql_id(entity_id)?, action],
        )?;
        Ok(())
    }

    /// Ids are never reused: hard-deleted records only survive in the audit log
    fn next_id(&self, kind: &str) -> Result<EntityId> {
        let next: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(id), 0) + 1 FROM (
                SELECT id FROM records WHERE kind = ?1
                UNION ALL
                SELECT entity_id FROM audit_log WHERE kind = ?1
             )",
            params![kind],
            |row| row.get(0),
        )?;
        EntityId::try_from(next).map_err(|_| Error::Serialization(format!("invalid next id {}", next)))
    }

    fn load_record<E: DeserializeOwned>(&self, kind: &str, id: EntityId) -> Result<Option<E>> {
        // Ids outside the SQLite range were never stored
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM records WHERE kind = ?1 AND id = ?2 AND archived = 0",
                params![kind, id],
                |row| row.get(0),
            )
            .optional()?;

        payload.map(|payload| from_json(&payload)).transpose()
    }

    fn store_record<E: Identified + Serialize>(&self, record: &E) -> Result<()> {
        self.conn.execute(
            "INSERT INTO records (kind, id, payload) VALUES (?1, ?2, ?3)
             ON CONFLICT(kind, id) DO UPDATE SET payload = ?3",
            params![E::KIND, sql_id(record.id())?, to_json(record)?],
        )?;
        Ok(())
    }
}

/// SQLite integers are signed; larger ids cannot be stored
fn sql_id(id: EntityId) -> Result<i64> {
    i64::try_from(id).map_err(|_| Error::Serialization(format!("id {} exceeds the storage range", id)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|e| Error::Serialization(e.to_string()))
}

impl<D> Repository<D> for Database
where
    D: EntityDraft,
    D::Entity: Serialize + DeserializeOwned,
{
    fn list(&self) -> Result<Vec<D::Entity>> {
        let mut stmt = self.conn.prepare(
            "SELECT payload FROM records
             WHERE kind = ?1 AND archived = 0
             ORDER BY id ASC",
        )?;

        let payloads = stmt
            .query_map(params![<D::Entity as Identified>::KIND], |row| {
                row.get::<_, String>(0)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        payloads.iter().map(|payload| from_json(payload)).collect()
    }

    fn create(&mut self, draft: D) -> Result<D::Entity> {
        let kind = <D::Entity as Identified>::KIND;
        log_payload("create", kind, &draft);

        let entity = draft.into_entity(self.next_id(kind)?);
        self.store_record(&entity)?;
        self.record_audit(kind, entity.id(), "create")?;

        Ok(entity)
    }

    fn update(&mut self, patch: EntityPatch<D>) -> Result<D::Entity> {
        let kind = <D::Entity as Identified>::KIND;
        log_payload("update", kind, &patch);
        let notify = patch.fields.notifies_participants();

        let mut entity: D::Entity = self
            .load_record(kind, patch.id)?
            .ok_or(Error::NotFound { kind, id: patch.id })?;
        patch.fields.apply_to(&mut entity);
        self.store_record(&entity)?;
        self.record_audit(kind, entity.id(), "update")?;
        if notify {
            log::info!("Participants of {} #{} will be notified", kind, entity.id());
        }

        Ok(entity)
    }

    fn delete(&mut self, request: DeleteRequest) -> Result<()> {
        let kind = <D::Entity as Identified>::KIND;
        log_payload("delete", kind, &request);

        let id = i64::try_from(request.id).map_err(|_| Error::NotFound { kind, id: request.id })?;
        let (changed, action) = if request.options.archive_data {
            let changed = self.conn.execute(
                "UPDATE records SET archived = 1 WHERE kind = ?1 AND id = ?2 AND archived = 0",
                params![kind, id],
            )?;
            (changed, "archive")
        } else {
            let changed = self.conn.execute(
                "DELETE FROM records WHERE kind = ?1 AND id = ?2 AND archived = 0",
                params![kind, id],
            )?;
            (changed, "delete")
        };

        if changed == 0 {
            return Err(Error::NotFound { kind, id: request.id });
        }

        self.record_audit(kind, request.id, action)?;
        if request.options.notify_participants {
            log::info!("Participants of {} #{} will be notified", kind, request.id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Process, ProcessStatus};
    use crate::dialogs::{ProcessDraft, ProcessField};
    use crate::form::{DeleteOptions, FormDraft};

    fn create_test_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.import(&[Process::new(1, "Plan climat"), Process::new(2, "Budget participatif")])
            .unwrap();
        db
    }

    fn list(db: &Database) -> Vec<Process> {
        Repository::<ProcessDraft>::list(db).unwrap()
    }

    #[test]
    fn test_import_and_list() {
        let db = create_test_db();
        let processes = list(&db);
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0].title, "Plan climat");

        // Re-importing the same ids is a no-op
        assert_eq!(db.import(&[Process::new(1, "Autre")]).unwrap(), 0);
    }

    #[test]
    fn test_create_assigns_next_id_and_audits() {
        let mut db = create_test_db();
        let draft = ProcessDraft {
            title: "Parc urbain".to_string(),
            ..ProcessDraft::default()
        };
        let created = Repository::<ProcessDraft>::create(&mut db, draft).unwrap();
        assert_eq!(created.id, 3);

        let audit = db.audit_entries(Some(10)).unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].kind, "process");
        assert_eq!(audit[0].entity_id, 3);
        assert_eq!(audit[0].action, "create");
    }

    #[test]
    fn test_update_persists_patch() {
        let mut db = create_test_db();
        let mut fields = ProcessDraft::default();
        fields.apply(ProcessField::Title("Plan climat 2030".to_string()));
        fields.apply(ProcessField::Status(ProcessStatus::Active));

        Repository::<ProcessDraft>::update(&mut db, EntityPatch { id: 1, fields }).unwrap();

        let processes = list(&db);
        assert_eq!(processes[0].title, "Plan climat 2030");
        assert_eq!(processes[0].status, Some(ProcessStatus::Active));
    }

    #[test]
    fn test_archived_records_are_hidden_and_not_reused() {
        let mut db = create_test_db();
        let request = DeleteRequest {
            id: 2,
            options: DeleteOptions::default(),
        };
        Repository::<ProcessDraft>::delete(&mut db, request).unwrap();
        assert_eq!(list(&db).len(), 1);

        let draft = ProcessDraft {
            title: "Nouveau".to_string(),
            ..ProcessDraft::default()
        };
        let created = Repository::<ProcessDraft>::create(&mut db, draft).unwrap();
        assert_eq!(created.id, 3);

        let actions: Vec<String> = db
            .audit_entries(None)
            .unwrap()
            .into_iter()
            .map(|entry| entry.action)
            .collect();
        assert_eq!(actions, vec!["create", "archive"]);
    }

    #[test]
    fn test_hard_deleted_top_id_is_not_reused() {
        let mut db = create_test_db();
        let request = DeleteRequest {
            id: 2,
            options: DeleteOptions {
                archive_data: false,
                notify_participants: false,
            },
        };
        Repository::<ProcessDraft>::delete(&mut db, request).unwrap();

        let draft = ProcessDraft {
            title: "Nouveau".to_string(),
            ..ProcessDraft::default()
        };
        let created = Repository::<ProcessDraft>::create(&mut db, draft).unwrap();
        assert_eq!(created.id, 3);

        let actions: Vec<String> = db
            .audit_entries(None)
            .unwrap()
            .into_iter()
            .map(|entry| format!("{} {}", entry.action, entry.entity_id))
            .collect();
        assert_eq!(actions, vec!["create 3", "delete 2"]);
    }

    #[test]
    fn test_ids_beyond_sqlite_range() {
        let mut db = create_test_db();
        let huge = u64::MAX;

        let err = db.import(&[Process::new(huge, "Trop grand")]).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));

        let patch = EntityPatch {
            id: huge,
            fields: ProcessDraft::default(),
        };
        let err = Repository::<ProcessDraft>::update(&mut db, patch).unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "process", .. }));

        let request = DeleteRequest {
            id: huge,
            options: DeleteOptions::default(),
        };
        let err = Repository::<ProcessDraft>::delete(&mut db, request).unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "process", .. }));
        assert_eq!(list(&db).len(), 2);
    }

    #[test]
    fn test_delete_missing_record() {
        let mut db = create_test_db();
        let request = DeleteRequest {
            id: 9,
            options: DeleteOptions {
                archive_data: false,
                notify_participants: false,
            },
        };
        let err = Repository::<ProcessDraft>::delete(&mut db, request).unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "process", id: 9 }));
        assert!(db.audit_entries(None).unwrap().is_empty());
    }
}
