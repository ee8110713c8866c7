//! Quote generation: prompting the model and cleaning up its output.

use crate::models::Quote;
use crate::services::providers::{GenerationParams, TextProvider};
use anyhow::anyhow;
use service_core::error::AppError;
use std::sync::Arc;

/// Fixed prompt sent to the text model. Asks for JSON with a one-shot
/// example so the model has a concrete shape to imitate.
const QUOTE_PROMPT: &str = "Genera una cita corta e inspiradora de un personaje célebre de la historia (filósofo, científico, artista, etc.). Devuelve tu respuesta en un formato JSON válido con las claves 'quote' y 'author'. Ejemplo: {\"quote\": \"La imaginación es más importante que el conocimiento.\", \"author\": \"Albert Einstein\"}";

/// Produces quotes through an injected text provider. One outbound model
/// call per invocation, no caching: identical calls may return different
/// quotes.
#[derive(Clone)]
pub struct QuoteGenerator {
    provider: Arc<dyn TextProvider>,
}

impl QuoteGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Ask the model for a quote and parse the JSON object embedded in its
    /// reply.
    pub async fn generate_quote(&self) -> Result<Quote, AppError> {
        let raw = self
            .provider
            .generate(QUOTE_PROMPT, &GenerationParams::default())
            .await
            .map_err(|e| AppError::GenerationError(anyhow!("Error al generar la cita: {e}")))?;

        let object = extract_json_object(&raw).ok_or_else(|| AppError::ValidationError {
            message: "La respuesta de Gemini no fue un JSON válido".to_string(),
            raw: Some("No se encontró un objeto JSON en la respuesta".to_string()),
        })?;

        serde_json::from_str(object).map_err(|e| AppError::ValidationError {
            message: "La respuesta de Gemini no fue un JSON válido".to_string(),
            raw: Some(e.to_string()),
        })
    }
}

/// Best-effort extraction of a JSON object embedded in free text: slice
/// from the first `{` to the last `}`, inclusive.
///
/// This is a heuristic, not a parser. A reply containing two disjoint
/// objects yields a slice spanning both, which then fails to parse
/// downstream; truncated output fails the same way. Kept in one place so a
/// stricter extractor can replace it without touching the handler.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end >= start).then(|| &raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;

    #[test]
    fn extracts_object_from_prose() {
        let raw = "¡Claro! Aquí tienes tu cita: {\"quote\": \"a\", \"author\": \"b\"} ¡Espero que te guste!";
        assert_eq!(
            extract_json_object(raw),
            Some("{\"quote\": \"a\", \"author\": \"b\"}")
        );
    }

    #[test]
    fn extracts_object_from_code_fences() {
        let raw = "```json\n{\"quote\": \"a\", \"author\": \"b\"}\n```";
        assert_eq!(
            extract_json_object(raw),
            Some("{\"quote\": \"a\", \"author\": \"b\"}")
        );
    }

    #[test]
    fn no_braces_yields_none() {
        assert_eq!(extract_json_object("sin json por aquí"), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn reversed_braces_yield_none() {
        assert_eq!(extract_json_object("} nada {"), None);
    }

    #[test]
    fn two_objects_slice_spans_both() {
        let raw = "{\"a\": 1} y {\"b\": 2}";
        assert_eq!(extract_json_object(raw), Some("{\"a\": 1} y {\"b\": 2}"));
    }

    #[tokio::test]
    async fn well_formed_reply_round_trips() {
        let generator = QuoteGenerator::new(Arc::new(MockTextProvider::with_response(
            "Texto previo {\"quote\": \"La vida es bella\", \"author\": \"Roberto Benigni\"} texto posterior",
        )));
        let quote = generator.generate_quote().await.expect("quote");
        assert_eq!(quote.quote, "La vida es bella");
        assert_eq!(quote.author, "Roberto Benigni");
    }

    #[tokio::test]
    async fn braceless_reply_is_a_validation_error() {
        let generator =
            QuoteGenerator::new(Arc::new(MockTextProvider::with_response("hoy no hay citas")));
        let err = generator.generate_quote().await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn unparseable_slice_is_a_validation_error() {
        let generator = QuoteGenerator::new(Arc::new(MockTextProvider::with_response(
            "{\"quote\": \"a\", \"author\": \"b\"} y {\"quote\": \"c\", \"author\": \"d\"}",
        )));
        let err = generator.generate_quote().await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn provider_failure_is_a_generation_error() {
        let generator = QuoteGenerator::new(Arc::new(MockTextProvider::failing()));
        let err = generator.generate_quote().await.unwrap_err();
        assert!(matches!(err, AppError::GenerationError(_)));
    }
}
