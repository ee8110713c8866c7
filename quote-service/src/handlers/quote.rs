use crate::models::Quote;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `GET /api/get-quote` — ask the model for a fresh quote.
///
/// Fails fast when the provider was never initialized; no retry, no lazy
/// re-init for the process lifetime.
pub async fn get_quote(State(state): State<AppState>) -> Result<Json<Quote>, AppError> {
    let quotes = state.quotes.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("El modelo de IA no está configurado".to_string())
    })?;

    let quote = quotes.generate_quote().await?;
    Ok(Json(quote))
}
