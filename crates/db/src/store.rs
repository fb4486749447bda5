//! The persistence interface the record facade depends on.

use std::future::Future;

use shelter_core::filter::RecordFilter;
use shelter_core::kind::RecordKind;
use shelter_core::record::RecordFields;
use shelter_core::types::{DbId, Timestamp};

use crate::models::record::Record;
use crate::repositories::RecordRepo;
use crate::DbPool;

/// Query-with-filters, find-by-id, insert, update-if-exists and
/// delete-if-exists over one table per [`RecordKind`].
///
/// Implemented for [`DbPool`]; tests substitute an in-memory store.
pub trait RecordStore: Send + Sync {
    fn list(
        &self,
        kind: RecordKind,
        filter: &RecordFilter,
    ) -> impl Future<Output = Result<Vec<Record>, sqlx::Error>> + Send;

    fn find_by_id(
        &self,
        kind: RecordKind,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Record>, sqlx::Error>> + Send;

    fn exists(
        &self,
        kind: RecordKind,
        id: DbId,
    ) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;

    fn insert(
        &self,
        kind: RecordKind,
        input: &RecordFields,
        date_created: Timestamp,
    ) -> impl Future<Output = Result<Record, sqlx::Error>> + Send;

    /// Replace the row's fields. Resolves to `false` when no row was written.
    fn update(
        &self,
        kind: RecordKind,
        id: DbId,
        input: &RecordFields,
    ) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;

    /// Remove the row. Resolves to `false` when nothing was removed.
    fn delete(
        &self,
        kind: RecordKind,
        id: DbId,
    ) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;
}

impl RecordStore for DbPool {
    async fn list(
        &self,
        kind: RecordKind,
        filter: &RecordFilter,
    ) -> Result<Vec<Record>, sqlx::Error> {
        RecordRepo::list(self, kind, filter).await
    }

    async fn find_by_id(&self, kind: RecordKind, id: DbId) -> Result<Option<Record>, sqlx::Error> {
        RecordRepo::find_by_id(self, kind, id).await
    }

    async fn exists(&self, kind: RecordKind, id: DbId) -> Result<bool, sqlx::Error> {
        RecordRepo::exists(self, kind, id).await
    }

    async fn insert(
        &self,
        kind: RecordKind,
        input: &RecordFields,
        date_created: Timestamp,
    ) -> Result<Record, sqlx::Error> {
        RecordRepo::create(self, kind, input, date_created).await
    }

    async fn update(
        &self,
        kind: RecordKind,
        id: DbId,
        input: &RecordFields,
    ) -> Result<bool, sqlx::Error> {
        RecordRepo::replace(self, kind, id, input).await
    }

    async fn delete(&self, kind: RecordKind, id: DbId) -> Result<bool, sqlx::Error> {
        RecordRepo::delete(self, kind, id).await
    }
}
