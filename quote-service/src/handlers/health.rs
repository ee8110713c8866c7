use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Also reports whether quote generation is available,
/// since the service keeps running without an API key.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "quote-service",
            "version": env!("CARGO_PKG_VERSION"),
            "quote_provider": state.quotes.is_some(),
        })),
    )
}

/// Readiness probe. There are no backing stores to wait for.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
