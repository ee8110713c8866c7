//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, TextProvider};
use async_trait::async_trait;

/// Test double that always returns the same canned reply (or failure).
pub struct MockTextProvider {
    reply: Option<String>,
}

impl MockTextProvider {
    /// A provider that replies to every prompt with `text`.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
        }
    }

    /// A provider whose calls always fail, for exercising the
    /// generation-error path.
    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::ApiError(
                "mock provider failure".to_string(),
            )),
        }
    }
}
