//! Shelter API server library.
//!
//! Exposes the core building blocks (config, state, error handling, the
//! record facade, routes) so integration tests and the binary entrypoint
//! can both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod routes;
pub mod service;
pub mod state;
