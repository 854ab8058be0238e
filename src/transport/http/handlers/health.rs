use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    // Touching the store confirms the shared state is reachable.
    let _ = state.store.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
