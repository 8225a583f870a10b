//! Small response bodies shared by several routes.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// `{"message": "..."}`
#[derive(Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> Json<Message> {
    Json(Message {
        message: text.into(),
    })
}
