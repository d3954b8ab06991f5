//! Model facade delegating to a configured provider.
//!
//! [`AiModel`] gives callers a provider-agnostic handle: it holds one
//! boxed [`TextProvider`] and forwards every call unchanged.

use crate::error::Result;
use crate::generate::{
    BoxedTextProvider, GenerateRequest, GenerationResult, TextProvider, TextStream,
};

/// A language model bound to one provider.
///
/// Pure delegation: requests and results pass through untouched, so the
/// facade works with any current or future [`TextProvider`] backend.
///
/// # Example
///
/// ```rust,ignore
/// use ai_sdk::prelude::*;
///
/// let model = AiModel::new(Ollama::with_model("llama3.1")?);
/// let result = model.generate_text(&GenerateRequest::new("Hello!")).await?;
/// println!("{result}");
/// ```
pub struct AiModel {
    provider: BoxedTextProvider,
}

impl AiModel {
    /// Create a model from any provider.
    #[must_use]
    pub fn new(provider: impl TextProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    /// Create a model from an already-boxed provider.
    #[must_use]
    pub fn from_boxed(provider: BoxedTextProvider) -> Self {
        Self { provider }
    }

    /// Generate text through the configured provider.
    ///
    /// # Errors
    ///
    /// Propagates the provider's error unchanged.
    pub async fn generate_text(&self, request: &GenerateRequest) -> Result<GenerationResult> {
        self.provider.generate_text(request).await
    }

    /// Stream a response through the configured provider.
    ///
    /// # Errors
    ///
    /// Propagates the provider's error unchanged; providers without
    /// streaming support report [`Error::NotSupported`](crate::Error::NotSupported).
    pub async fn stream_response(&self, request: &GenerateRequest) -> Result<TextStream> {
        self.provider.stream_response(request).await
    }

    /// Name of the underlying provider.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Model identifier the underlying provider dispatches to.
    #[must_use]
    pub fn default_model(&self) -> &str {
        self.provider.default_model()
    }
}

impl std::fmt::Debug for AiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiModel")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.default_model())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::providers::MockProvider;

    #[tokio::test]
    async fn forwards_generate_text() {
        let model = AiModel::new(MockProvider::new(vec!["delegated".to_owned()]));

        let result = model
            .generate_text(&GenerateRequest::new("hello"))
            .await
            .unwrap();
        assert_eq!(result.text, "delegated");
        assert_eq!(result.model, "mock-model");
    }

    #[tokio::test]
    async fn forwards_stream_response() {
        let model = AiModel::new(MockProvider::new(vec!["hi".to_owned()]));

        let err = model
            .stream_response(&GenerateRequest::new("hello"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, Error::NotSupported(_)));
    }

    #[test]
    fn exposes_provider_identity() {
        let model = AiModel::new(MockProvider::new(vec![]).with_model_id("test-model"));

        assert_eq!(model.provider_name(), "mock");
        assert_eq!(model.default_model(), "test-model");
    }

    #[test]
    fn debug_names_the_provider() {
        let model = AiModel::new(MockProvider::new(vec![]));
        let debug = format!("{model:?}");
        assert!(debug.contains("mock"));
    }
}
