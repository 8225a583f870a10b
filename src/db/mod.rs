//! Persistence: the `students` table, the pooled database handle, and per-request sessions.
//!
//! Layout:
//! - `schema.rs`: DDL applied at startup
//! - `models.rs`: Rust structs mirroring rows
//! - `database.rs`: pool ownership and lifecycle
//! - `session.rs`: scoped connection with the table queries

pub mod database;
pub mod models;
pub mod schema;
pub mod session;

pub use database::Database;
pub use models::{Student, StudentFields};
pub use schema::SQLITE_INIT;
pub use session::Session;
