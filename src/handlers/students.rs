//! Student CRUD handlers. Each one checks out a session, runs one operation and
//! lets the session drop before the response is written.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::response::{message, Message};
use crate::schemas::{FilterParams, StudentCreate, StudentResponse};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Every stored student, in id order.
#[utoipa::path(
    get,
    path = "/students/",
    responses((status = 200, description = "All students", body = [StudentResponse])),
    tag = "students"
)]
pub async fn get_all_students(State(state): State<AppState>) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let mut session = state.db.session().await?;
    let rows = StudentService::list(&mut session).await?;
    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/students/{student_id}",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = StudentResponse),
        (status = 404, description = "Student not found!", body = ErrorBody),
        (status = 422, description = "Invalid id", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    ValidPath(student_id): ValidPath<i64>,
) -> Result<Json<StudentResponse>, AppError> {
    let mut session = state.db.session().await?;
    let student = StudentService::get(&mut session, student_id).await?;
    Ok(Json(student.into()))
}

/// Students whose `dept` and `year` both equal the query values.
#[utoipa::path(
    get,
    path = "/students/students/filter",
    params(FilterParams),
    responses(
        (status = 200, description = "Matching students", body = [StudentResponse]),
        (status = 422, description = "Missing or invalid query parameter", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn filter_students(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<FilterParams>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let mut session = state.db.session().await?;
    let rows = StudentService::filter(&mut session, &params.dept, params.year).await?;
    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/students/",
    request_body = StudentCreate,
    responses(
        (status = 200, description = "Created student", body = StudentResponse),
        (status = 404, description = "Student already exists!", body = ErrorBody),
        (status = 422, description = "Invalid body", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<StudentCreate>,
) -> Result<Json<StudentResponse>, AppError> {
    let mut session = state.db.session().await?;
    let student = StudentService::create(&mut session, &body.into()).await?;
    Ok(Json(student.into()))
}

/// Replaces every mutable field; nothing from the old row is kept except `id`.
#[utoipa::path(
    put,
    path = "/students/{student_id}",
    params(("student_id" = i64, Path, description = "Student id")),
    request_body = StudentCreate,
    responses(
        (status = 200, description = "Updated student", body = StudentResponse),
        (status = 404, description = "Student doesn't exist!", body = ErrorBody),
        (status = 422, description = "Invalid id or body", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    ValidPath(student_id): ValidPath<i64>,
    ValidJson(body): ValidJson<StudentCreate>,
) -> Result<Json<StudentResponse>, AppError> {
    let mut session = state.db.session().await?;
    let student = StudentService::update(&mut session, student_id, &body.into()).await?;
    Ok(Json(student.into()))
}

#[utoipa::path(
    delete,
    path = "/students/{student_id}",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student Deleted", body = Message),
        (status = 404, description = "Student doesn't exist!", body = ErrorBody),
        (status = 422, description = "Invalid id", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ValidPath(student_id): ValidPath<i64>,
) -> Result<Json<Message>, AppError> {
    let mut session = state.db.session().await?;
    StudentService::delete(&mut session, student_id).await?;
    Ok(message("Student Deleted"))
}
