use crate::models::CreateImageRequest;
use crate::startup::AppState;
use anyhow::anyhow;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use service_core::error::AppError;

/// Quote drawn when the request omits one.
const DEFAULT_QUOTE: &str = "Una cita inspiradora vive aquí.";

/// Author drawn when the request omits one.
const DEFAULT_AUTHOR: &str = "Anónimo";

/// Filename suggested to the client for the download.
const DOWNLOAD_FILENAME: &str = "cita_generada.png";

/// `POST /api/create-image` — render the quote card and return it as a
/// downloadable PNG.
pub async fn create_image(
    State(state): State<AppState>,
    Json(request): Json<CreateImageRequest>,
) -> Result<Response, AppError> {
    let quote = request.quote.unwrap_or_else(|| DEFAULT_QUOTE.to_string());
    let author = request.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    let png = state
        .renderer
        .render(&quote, &author)
        .map_err(|e| AppError::RenderError(anyhow!("Error al crear la imagen: {e}")))?;

    tracing::debug!(bytes = png.len(), "Rendered quote image");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        png,
    )
        .into_response())
}
