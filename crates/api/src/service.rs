//! The record facade: list, fetch, create, replace and delete for one kind.
//!
//! Handlers build a [`RecordService`] per request from the shared pool and
//! clock. All persistence goes through [`RecordStore`], so the same logic is
//! exercised in unit tests against an in-memory store.

use shelter_core::clock::Clock;
use shelter_core::error::CoreError;
use shelter_core::filter::RecordFilter;
use shelter_core::kind::RecordKind;
use shelter_core::record::RecordPayload;
use shelter_core::types::DbId;
use shelter_db::models::record::Record;
use shelter_db::store::RecordStore;

use crate::error::AppResult;

/// CRUD operations over one record kind.
pub struct RecordService<'a, S: RecordStore> {
    kind: RecordKind,
    store: &'a S,
    clock: &'a dyn Clock,
}

impl<'a, S: RecordStore> RecordService<'a, S> {
    pub fn new(kind: RecordKind, store: &'a S, clock: &'a dyn Clock) -> Self {
        Self { kind, store, clock }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Records matching every present filter field.
    pub async fn list(&self, filter: &RecordFilter) -> AppResult<Vec<Record>> {
        Ok(self.store.list(self.kind, filter).await?)
    }

    /// The record with `id`, or `NotFound`.
    pub async fn get(&self, id: DbId) -> AppResult<Record> {
        self.store
            .find_by_id(self.kind, id)
            .await?
            .ok_or_else(|| self.not_found(id).into())
    }

    /// Validate and insert a new record. Any client-sent id is ignored and
    /// `date_created` is stamped from the clock.
    pub async fn create(&self, payload: &RecordPayload) -> AppResult<Record> {
        let fields = payload.validate(self.kind)?;
        let record = self
            .store
            .insert(self.kind, &fields, self.clock.now())
            .await?;
        tracing::info!(kind = %self.kind, id = record.id, "Record created");
        Ok(record)
    }

    /// Replace the record at `id` with `payload`.
    ///
    /// The payload must carry the same id as the path. When the update writes
    /// nothing, existence is re-checked: a missing row is `NotFound`, a row
    /// that still exists is an unresolved `ConcurrencyConflict`. Conflicts are
    /// not retried.
    pub async fn replace(&self, id: DbId, payload: &RecordPayload) -> AppResult<()> {
        let fields = payload.validate(self.kind)?;
        if payload.id != Some(id) {
            return Err(CoreError::IdMismatch {
                entity: self.kind.entity_name(),
                path_id: id,
                body_id: payload.id,
            }
            .into());
        }

        if self.store.update(self.kind, id, &fields).await? {
            tracing::info!(kind = %self.kind, id, "Record replaced");
            return Ok(());
        }

        if self.store.exists(self.kind, id).await? {
            Err(CoreError::ConcurrencyConflict {
                entity: self.kind.entity_name(),
                id,
            }
            .into())
        } else {
            Err(self.not_found(id).into())
        }
    }

    /// Delete the record at `id`. Deleting an absent record is `NotFound`.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete(self.kind, id).await? {
            return Err(self.not_found(id).into());
        }
        tracing::info!(kind = %self.kind, id, "Record deleted");
        Ok(())
    }

    fn not_found(&self, id: DbId) -> CoreError {
        CoreError::NotFound {
            entity: self.kind.entity_name(),
            id,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
