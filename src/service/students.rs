//! Student operations. Each call runs against the caller's session and maps
//! missing rows and duplicate emails onto `AppError`.

use crate::db::{Session, Student, StudentFields};
use crate::error::AppError;

pub const NOT_FOUND: &str = "Student not found!";
pub const ALREADY_EXISTS: &str = "Student already exists!";
pub const DOES_NOT_EXIST: &str = "Student doesn't exist!";

pub struct StudentService;

impl StudentService {
    pub async fn get(session: &mut Session, id: i64) -> Result<Student, AppError> {
        session
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
    }

    pub async fn list(session: &mut Session) -> Result<Vec<Student>, AppError> {
        Ok(session.list().await?)
    }

    pub async fn filter(session: &mut Session, dept: &str, year: i64) -> Result<Vec<Student>, AppError> {
        Ok(session.filter(dept, year).await?)
    }

    /// Rejects an email already on file, then inserts. A concurrent insert that wins
    /// the race trips the table's UNIQUE(email) and is reported the same way.
    pub async fn create(session: &mut Session, fields: &StudentFields) -> Result<Student, AppError> {
        if session.find_by_email(&fields.email).await?.is_some() {
            return Err(AppError::AlreadyExists(ALREADY_EXISTS.into()));
        }
        let student = session.insert(fields).await.map_err(duplicate_email)?;
        tracing::info!(id = student.id, "student created");
        Ok(student)
    }

    /// Full replace of name, dept, email and year.
    pub async fn update(session: &mut Session, id: i64, fields: &StudentFields) -> Result<Student, AppError> {
        let student = session
            .update(id, fields)
            .await
            .map_err(duplicate_email)?
            .ok_or_else(|| AppError::NotFound(DOES_NOT_EXIST.into()))?;
        tracing::info!(id, "student updated");
        Ok(student)
    }

    pub async fn delete(session: &mut Session, id: i64) -> Result<(), AppError> {
        if !session.delete(id).await? {
            return Err(AppError::NotFound(DOES_NOT_EXIST.into()));
        }
        tracing::info!(id, "student deleted");
        Ok(())
    }
}

fn duplicate_email(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::AlreadyExists(ALREADY_EXISTS.into()),
        _ => AppError::Db(err),
    }
}
