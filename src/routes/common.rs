//! Common routes: greeting, health, readiness, version, OpenAPI document.

use crate::doc::ApiDoc;
use crate::response::{message, Message};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

pub const GREETING: &str = "FastAPI with sql";

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Readiness plus the state of the database round-trip.
#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = Message)),
    tag = "service"
)]
pub async fn root() -> Json<Message> {
    message(GREETING)
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.db.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /, /health, /ready, /version, /openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
