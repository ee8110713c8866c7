//! Handler tests for `/api/create-image`.
//!
//! Rendering needs a real font file. Tests look for the bundled font
//! first and fall back to common system locations, skipping when none is
//! present (same skip-guard style as the service's other suites).

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use quote_service::config::ImageConfig;
use quote_service::services::QuoteRenderer;
use quote_service::startup::{app_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn find_test_font() -> Option<PathBuf> {
    let candidates = [
        "fonts/arial.ttf",
        "../fonts/arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
    ];
    candidates.iter().map(PathBuf::from).find(|p| p.exists())
}

fn render_state(font_path: PathBuf) -> AppState {
    AppState {
        quotes: None,
        renderer: Arc::new(QuoteRenderer::new(ImageConfig {
            font_path,
            ..ImageConfig::default()
        })),
    }
}

async fn post_image(state: AppState, body: &str) -> axum::response::Response {
    app_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create-image")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn renders_a_1080_square_png_attachment() {
    let Some(font) = find_test_font() else {
        eprintln!("Skipping test: no font file available");
        return;
    };

    let response = post_image(
        render_state(font),
        r#"{"quote": "La vida es bella", "author": "Anónimo"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("cita_generada.png"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(!bytes.is_empty());

    let image = image::load_from_memory(&bytes).expect("valid PNG");
    assert_eq!(image.width(), 1080);
    assert_eq!(image.height(), 1080);
}

#[tokio::test]
async fn missing_fields_fall_back_to_defaults() {
    let Some(font) = find_test_font() else {
        eprintln!("Skipping test: no font file available");
        return;
    };

    let response = post_image(render_state(font), "{}").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let image = image::load_from_memory(&bytes).expect("valid PNG");
    assert_eq!((image.width(), image.height()), (1080, 1080));
}

#[tokio::test]
async fn very_long_quotes_keep_the_fixed_dimensions() {
    let Some(font) = find_test_font() else {
        eprintln!("Skipping test: no font file available");
        return;
    };

    let long_quote = "El que tiene un porqué para vivir puede soportar casi cualquier cómo, \
                      y quien siembra constancia cosecha resultados que nadie más puede ver \
                      hasta que el tiempo los vuelve evidentes para todos los demás."
        .to_string();
    let body = serde_json::json!({ "quote": long_quote, "author": "Anónimo" }).to_string();

    let response = post_image(render_state(font), &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let image = image::load_from_memory(&bytes).expect("valid PNG");
    assert_eq!((image.width(), image.height()), (1080, 1080));
}

#[tokio::test]
async fn missing_font_is_a_500_render_error() {
    // No skip guard: this path must fail the same way everywhere.
    let state = render_state(PathBuf::from("fonts/definitely-not-here.ttf"));
    let response = post_image(state, r#"{"quote": "hola"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(
        message.starts_with("Error al crear la imagen"),
        "unexpected message: {message}"
    );
}
