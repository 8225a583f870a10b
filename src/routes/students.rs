//! Student CRUD routes. `/students` is accepted as well as `/students/`.

use crate::handlers::{
    create_student, delete_student, filter_students, get_all_students, get_student, update_student,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students/", get(get_all_students).post(create_student))
        .route("/students", get(get_all_students).post(create_student))
        .route("/students/students/filter", get(filter_students))
        .route(
            "/students/:student_id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}
