use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} id in body ({body_id:?}) does not match id in path ({path_id})")]
    IdMismatch {
        entity: &'static str,
        path_id: DbId,
        body_id: Option<DbId>,
    },

    #[error("Concurrent modification of {entity} with id {id}")]
    ConcurrencyConflict { entity: &'static str, id: DbId },

    #[error("Configuration error: {0}")]
    Configuration(String),
}
