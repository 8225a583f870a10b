//! Pooled SQLite handle. Built once in `main`, shared through `AppState`, closed at shutdown.

use crate::config::Settings;
use crate::db::schema::SQLITE_INIT;
use crate::db::session::Session;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::{str::FromStr, time::Duration};
use tracing::info;

#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool (creating the database file if missing) and apply the table DDL.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        let connect_opts = SqliteConnectOptions::from_str(&settings.database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(connect_opts)
            .await?;

        apply_schema(&pool).await?;
        info!(url = %settings.database_url, "database ready");
        Ok(Database { pool })
    }

    /// Check out one connection for a unit of work. It goes back to the pool when the
    /// returned `Session` is dropped, whichever way the caller exits.
    pub async fn session(&self) -> Result<Session, AppError> {
        let conn = self.pool.acquire().await?;
        Ok(Session::new(conn))
    }

    /// Round-trip `SELECT 1`; used by readiness.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Wait for checked-out sessions to come back, then close every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("database closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
