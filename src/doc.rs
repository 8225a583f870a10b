//! OpenAPI document for the HTTP API, served at `GET /openapi.json`.

use crate::error::ErrorBody;
use crate::response::Message;
use crate::schemas::{StudentCreate, StudentResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Integration with sql",
        description = "CRUD over student records."
    ),
    paths(
        crate::routes::common::root,
        crate::handlers::students::get_all_students,
        crate::handlers::students::get_student,
        crate::handlers::students::filter_students,
        crate::handlers::students::create_student,
        crate::handlers::students::update_student,
        crate::handlers::students::delete_student,
    ),
    components(schemas(StudentCreate, StudentResponse, Message, ErrorBody)),
    tags(
        (name = "students", description = "Student records"),
        (name = "service", description = "Service endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_student_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/students/",
            "/students/{student_id}",
            "/students/students/filter",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let item = &doc.paths.paths["/students/{student_id}"];
        assert!(item.get.is_some() && item.put.is_some() && item.delete.is_some());
    }

    #[test]
    fn schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        for name in ["StudentCreate", "StudentResponse", "Message", "ErrorBody"] {
            assert!(schemas.contains_key(name), "missing {name}");
        }
    }
}
