//! Domain logic for the shelter record service.
//!
//! Holds everything that does not need a database or an HTTP stack:
//! record kinds and their rules, list filters, payload validation,
//! and the clock used to stamp creation times.

pub mod clock;
pub mod error;
pub mod filter;
pub mod kind;
pub mod record;
pub mod types;
