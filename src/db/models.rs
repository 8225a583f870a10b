//! Row structs mirroring the `students` table.

use sqlx::FromRow;

/// One persisted student. `id` is assigned by SQLite on insert.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub dept: String,
    pub email: String,
    pub year: i64,
}

/// Column values written by insert and update; everything but `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub dept: String,
    pub email: String,
    pub year: i64,
}
