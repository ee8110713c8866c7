//! Application startup and lifecycle management.
//!
//! Builds the shared state, binds the listener, and serves the router
//! until a shutdown signal arrives.

use crate::config::QuoteConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::{QuoteGenerator, QuoteRenderer};
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state. Requests share no mutable state; everything
/// here is construct-once, read-only.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key was configured at startup; `/api/get-quote`
    /// then fails fast for the process lifetime.
    pub quotes: Option<QuoteGenerator>,
    pub renderer: Arc<QuoteRenderer>,
}

/// Build the service router for the given state.
pub fn app_router(state: AppState) -> Router {
    // The frontend lives on another origin; requests are deliberately
    // accepted from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/get-quote", get(handlers::quote::get_quote))
        .route("/api/create-image", post(handlers::image::create_image))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: QuoteConfig) -> Result<Self, AppError> {
        let quotes = match &config.google.api_key {
            Some(key) => {
                let provider = GeminiTextProvider::new(GeminiConfig::new(
                    key.clone(),
                    config.models.text_model.clone(),
                ));
                tracing::info!(
                    model = %config.models.text_model,
                    "Initialized Gemini text provider"
                );
                Some(QuoteGenerator::new(Arc::new(provider)))
            }
            None => {
                // Image rendering keeps working without a key.
                tracing::error!(
                    "GOOGLE_API_KEY is not set; /api/get-quote is disabled for this process"
                );
                None
            }
        };

        let renderer = Arc::new(QuoteRenderer::new(config.image.clone()));

        let state = AppState { quotes, renderer };

        // Bind the listener (port 0 = random port for testing).
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Quote service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped by ctrl-c or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, app_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
