//! Row models.
//!
//! All three record kinds share the [`record::Record`] row shape; the kind
//! only decides which table the row lives in.

pub mod record;
