use axum::response::{IntoResponse, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
