//! Student API: CRUD over a single SQLite-backed `students` table.

pub mod config;
pub mod db;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod state;

pub use config::Settings;
pub use db::Database;
pub use doc::ApiDoc;
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
