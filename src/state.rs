//! Shared application state for all routes.

use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    /// Sessions are checked out per request; the pool itself lives for the process.
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
