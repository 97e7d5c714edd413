//! Core data model for the object index.
//!
//! The entities map cleanly to database tables via `sqlx::FromRow` and
//! serialize naturally as JSON via `serde`.

pub mod record;
