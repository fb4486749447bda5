//! Record row model shared by the `animals`, `cats` and `dogs` tables.

use serde::{Deserialize, Serialize};
use shelter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from one of the record tables.
///
/// Serialized as `{id, name, species, age, gender, dateCreated}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub age: i32,
    pub gender: Option<String>,
    pub date_created: Timestamp,
}
