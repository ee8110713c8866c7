use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Request-level failures, converted to JSON error responses at the HTTP
/// boundary.
///
/// Every variant is terminal for its request: nothing is retried, and a
/// failure in one request never affects the next.
#[derive(Debug, Error)]
pub enum AppError {
    /// A collaborator the handler depends on was never initialized.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Upstream output did not have the expected shape. `raw` carries the
    /// underlying parse detail for the response body.
    #[error("{message}")]
    ValidationError {
        message: String,
        raw: Option<String>,
    },

    /// The model call itself failed.
    #[error("{0}")]
    GenerationError(anyhow::Error),

    /// Font loading, drawing, or image encoding failed.
    #[error("{0}")]
    RenderError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            raw: Option<String>,
        }

        // Every request error surfaces as 500; the body carries the
        // human-readable message.
        let (error, raw) = match self {
            AppError::ServiceUnavailable(message) => (message, None),
            AppError::ValidationError { message, raw } => (message, raw),
            AppError::GenerationError(err) => (err.to_string(), None),
            AppError::RenderError(err) => (err.to_string(), None),
            AppError::ConfigError(err) => {
                ("Configuration error".to_string(), Some(err.to_string()))
            }
            AppError::InternalError(err) => {
                ("Internal server error".to_string(), Some(err.to_string()))
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error, raw }),
        )
            .into_response()
    }
}
