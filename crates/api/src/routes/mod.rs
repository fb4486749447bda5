pub mod health;
pub mod records;

use axum::Router;
use shelter_core::kind::RecordKind;
use shelter_core::types::DbId;

use crate::config::RecordOperations;
use crate::state::AppState;

/// Prefix under which every record kind is mounted.
pub const API_PREFIX: &str = "/api";

/// Build the `/api` route tree.
///
/// Route hierarchy with the default operation sets. Each kind mounts only
/// the operations enabled for it, and a kind with none is left out:
///
/// ```text
/// /animals                list
/// /animals/{id}           get
///
/// /cats                   list, create
/// /cats/{id}              get, replace
///
/// /dogs                   list, create
/// /dogs/{id}              get, replace, delete
/// ```
pub fn api_routes(operations: &RecordOperations) -> Router<AppState> {
    RecordKind::ALL
        .into_iter()
        .filter(|kind| !operations.for_kind(*kind).is_empty())
        .fold(Router::new(), |router, kind| {
            router.nest(
                &format!("/{}", kind.table()),
                records::router(kind, operations.for_kind(kind)),
            )
        })
}

/// Path of the read-by-id endpoint for a record, used as the `Location` of
/// newly created records.
pub fn record_location(kind: RecordKind, id: DbId) -> String {
    format!("{API_PREFIX}/{}/{id}", kind.table())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_points_at_read_by_id() {
        assert_eq!(record_location(RecordKind::Dog, 7), "/api/dogs/7");
        assert_eq!(record_location(RecordKind::Animal, 1), "/api/animals/1");
    }
}
