//! Readiness probe backed by a live database round trip.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use database::postgres::{check_health_detailed, DatabaseConnection};
use serde_json::json;

pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready_handler)).with_state(db)
}

async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    let status = check_health_detailed(&db).await;

    let body = json!({
        "ready": status.healthy,
        "database": {
            "healthy": status.healthy,
            "message": status.message,
            "response_time_ms": status.response_time_ms,
        },
    });

    if status.healthy {
        (StatusCode::OK, Json(body)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
    }
}
