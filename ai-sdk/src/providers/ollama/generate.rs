//! Ollama `TextProvider` implementation.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::generate::{GenerateRequest, GenerationResult, TextProvider};

use super::client::{Ollama, OllamaErrorResponse};
use super::response::GenerateResponse;

impl Ollama {
    /// Issue a single generate call against the runtime.
    async fn send_generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = self.generate_url();
        let body = self.build_body(request);

        tracing::debug!(model = %body.model, %url, "sending generate request");

        let response = self.client().post(&url).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::parse_error(status.as_u16(), &text));
        }

        // An error payload can arrive with a success status; it still
        // counts as a transient runtime failure.
        if let Ok(error_response) = serde_json::from_str::<OllamaErrorResponse>(&text) {
            return Err(Error::connection(error_response.error));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::unexpected(format!("invalid generate response: {e}")))
    }
}

#[async_trait]
impl TextProvider for Ollama {
    async fn generate_text(&self, request: &GenerateRequest) -> Result<GenerationResult> {
        if request.prompt.is_empty() {
            return Err(Error::invalid_argument("prompt must not be empty"));
        }

        let budget = request.max_retries.max(1);
        let mut last_failure = None;

        for attempt in 1..=budget {
            match self.send_generate(request).await {
                Ok(raw) => return Ok(raw.into()),
                Err(err) if err.is_retryable() => {
                    tracing::warn!(attempt, budget, error = %err, "generate attempt failed");
                    last_failure = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        let source =
            last_failure.unwrap_or_else(|| Error::connection("no generate attempt was made"));
        Err(Error::exhausted(budget, source))
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn default_model(&self) -> &str {
        self.model()
    }
}
