//! Per-request unit of work over one pooled connection.
//!
//! Every mutation is a single autocommitted statement, so there is nothing to
//! roll back when a `Session` is dropped early.

use crate::db::models::{Student, StudentFields};
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

const COLUMNS: &str = "id, name, dept, email, year";

pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn new(conn: PoolConnection<Sqlite>) -> Self {
        Session { conn }
    }

    pub async fn get(&mut self, id: i64) -> Result<Option<Student>, sqlx::Error> {
        let sql = format!("SELECT {} FROM students WHERE id = ?1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
    }

    pub async fn list(&mut self) -> Result<Vec<Student>, sqlx::Error> {
        let sql = format!("SELECT {} FROM students ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Student>(&sql)
            .fetch_all(&mut *self.conn)
            .await
    }

    /// Exact match on both columns.
    pub async fn filter(&mut self, dept: &str, year: i64) -> Result<Vec<Student>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM students WHERE dept = ?1 AND year = ?2 ORDER BY id",
            COLUMNS
        );
        tracing::debug!(sql = %sql, dept, year, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(dept)
            .bind(year)
            .fetch_all(&mut *self.conn)
            .await
    }

    pub async fn find_by_email(&mut self, email: &str) -> Result<Option<Student>, sqlx::Error> {
        let sql = format!("SELECT {} FROM students WHERE email = ?1 LIMIT 1", COLUMNS);
        tracing::debug!(sql = %sql, email, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(email)
            .fetch_optional(&mut *self.conn)
            .await
    }

    /// Insert and return the stored row with its assigned id.
    pub async fn insert(&mut self, fields: &StudentFields) -> Result<Student, sqlx::Error> {
        let sql = format!(
            "INSERT INTO students (name, dept, email, year) VALUES (?1, ?2, ?3, ?4) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(&fields.name)
            .bind(&fields.dept)
            .bind(&fields.email)
            .bind(fields.year)
            .fetch_one(&mut *self.conn)
            .await
    }

    /// Overwrite all four mutable columns. `None` when no row has `id`.
    pub async fn update(&mut self, id: i64, fields: &StudentFields) -> Result<Option<Student>, sqlx::Error> {
        let sql = format!(
            "UPDATE students SET name = ?1, dept = ?2, email = ?3, year = ?4 WHERE id = ?5 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(&fields.name)
            .bind(&fields.dept)
            .bind(&fields.email)
            .bind(fields.year)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
    }

    /// Returns whether a row was removed.
    pub async fn delete(&mut self, id: i64) -> Result<bool, sqlx::Error> {
        let sql = "DELETE FROM students WHERE id = ?1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&mut *self.conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
