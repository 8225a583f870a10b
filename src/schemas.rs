//! Request and response shapes for the students API, kept apart from the row struct.

use crate::db::{Student, StudentFields};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of create and update. `id` is never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct StudentCreate {
    pub name: String,
    pub dept: String,
    pub email: String,
    pub year: i64,
}

/// A stored student as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub dept: String,
    pub email: String,
    pub year: i64,
}

/// `?dept=..&year=..`; both required.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterParams {
    pub dept: String,
    pub year: i64,
}

impl From<StudentCreate> for StudentFields {
    fn from(input: StudentCreate) -> Self {
        StudentFields {
            name: input.name,
            dept: input.dept,
            email: input.email,
            year: input.year,
        }
    }
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        StudentResponse {
            id: s.id,
            name: s.name,
            dept: s.dept,
            email: s.email,
            year: s.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_requires_every_field() {
        for missing in ["name", "dept", "email", "year"] {
            let mut body = json!({ "name": "A", "dept": "CS", "email": "a@x.com", "year": 2 });
            body.as_object_mut().unwrap().remove(missing);
            let err = serde_json::from_value::<StudentCreate>(body).unwrap_err();
            assert!(err.to_string().contains(missing), "{err}");
        }
    }

    #[test]
    fn create_rejects_wrong_types() {
        let bad_year = json!({ "name": "A", "dept": "CS", "email": "a@x.com", "year": "two" });
        assert!(serde_json::from_value::<StudentCreate>(bad_year).is_err());
        let bad_name = json!({ "name": 7, "dept": "CS", "email": "a@x.com", "year": 2 });
        assert!(serde_json::from_value::<StudentCreate>(bad_name).is_err());
    }

    #[test]
    fn create_ignores_client_id() {
        let body = json!({ "id": 99, "name": "A", "dept": "CS", "email": "a@x.com", "year": 2 });
        let input: StudentCreate = serde_json::from_value(body).unwrap();
        let fields = StudentFields::from(input);
        assert_eq!(fields.email, "a@x.com");
    }

    #[test]
    fn response_copies_row() {
        let row = Student {
            id: 1,
            name: "A".into(),
            dept: "CS".into(),
            email: "a@x.com".into(),
            year: 2,
        };
        let out = serde_json::to_value(StudentResponse::from(row)).unwrap();
        assert_eq!(
            out,
            json!({ "id": 1, "name": "A", "dept": "CS", "email": "a@x.com", "year": 2 })
        );
    }
}
