//! Repository for the `animals`, `cats` and `dogs` tables.
//!
//! The tables share one column layout, so every method takes the
//! [`RecordKind`] that selects the table. Table names come from the kind
//! enum and are never taken from user input.

use shelter_core::filter::RecordFilter;
use shelter_core::kind::RecordKind;
use shelter_core::record::RecordFields;
use shelter_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::record::Record;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, species, age, gender, date_created";

/// Provides CRUD operations for shelter records.
pub struct RecordRepo;

impl RecordRepo {
    /// List records matching every present filter field, in insertion order.
    pub async fn list(
        pool: &PgPool,
        kind: RecordKind,
        filter: &RecordFilter,
    ) -> Result<Vec<Record>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        if filter.name.is_some() {
            conditions.push(format!("name = ${}", conditions.len() + 1));
        }
        if filter.species.is_some() {
            conditions.push(format!("species = ${}", conditions.len() + 1));
        }
        if filter.age.is_some() {
            conditions.push(format!("age = ${}", conditions.len() + 1));
        }
        if filter.gender.is_some() {
            conditions.push(format!("gender = ${}", conditions.len() + 1));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM {table} {where_clause} ORDER BY id",
            table = kind.table(),
        );

        let mut q = sqlx::query_as::<_, Record>(&query);

        // Bind dynamic parameters in the same order as the conditions.
        if let Some(ref name) = filter.name {
            q = q.bind(name);
        }
        if let Some(ref species) = filter.species {
            q = q.bind(species);
        }
        if let Some(age) = filter.age {
            q = q.bind(age);
        }
        if let Some(ref gender) = filter.gender {
            q = q.bind(gender);
        }

        q.fetch_all(pool).await
    }

    /// Find a record by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: RecordKind,
        id: DbId,
    ) -> Result<Option<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", kind.table());
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a row with the given ID exists.
    pub async fn exists(pool: &PgPool, kind: RecordKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", kind.table());
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a new record, returning the created row with its generated ID.
    pub async fn create(
        pool: &PgPool,
        kind: RecordKind,
        input: &RecordFields,
        date_created: Timestamp,
    ) -> Result<Record, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name, species, age, gender, date_created) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}",
            kind.table()
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(input.age)
            .bind(&input.gender)
            .bind(date_created)
            .fetch_one(pool)
            .await
    }

    /// Replace every client-owned column of a record. `date_created` is kept.
    ///
    /// Returns `false` if no row was updated.
    pub async fn replace(
        pool: &PgPool,
        kind: RecordKind,
        id: DbId,
        input: &RecordFields,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET name = $2, species = $3, age = $4, gender = $5 WHERE id = $1",
            kind.table()
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(input.age)
            .bind(&input.gender)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a record. Returns `false` if no row was removed.
    pub async fn delete(pool: &PgPool, kind: RecordKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
