use std::sync::Arc;

use shelter_core::clock::Clock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shelter_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of creation timestamps.
    pub clock: Arc<dyn Clock>,
}
