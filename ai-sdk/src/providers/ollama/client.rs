//! Ollama API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::generate::GenerateRequest;

use super::config::OllamaConfig;

/// Ollama generate request body, posted to `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OllamaGenerateRequest {
    pub model: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
    pub stream: bool,
}

/// Ollama error response payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OllamaErrorResponse {
    pub error: String,
}

/// Ollama API client.
#[derive(Debug, Clone)]
pub struct Ollama {
    pub(crate) config: Arc<OllamaConfig>,
    pub(crate) http_client: Client,
}

impl Ollama {
    /// Create a new Ollama client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unexpected`] if the HTTP client cannot be built.
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let http_client = builder
            .build()
            .map_err(|e| Error::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Create a client dispatching to the given model on the local server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unexpected`] if the HTTP client cannot be built.
    pub fn with_model(model: impl Into<String>) -> Result<Self> {
        Self::new(OllamaConfig::with_model(model))
    }

    /// Create a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unexpected`] if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self> {
        Self::new(OllamaConfig::default())
    }

    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unexpected`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        Self::new(OllamaConfig::from_env())
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the configured model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get a reference to the HTTP client.
    pub(crate) const fn client(&self) -> &Client {
        &self.http_client
    }

    /// Build the generate API URL.
    pub(crate) fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }

    /// Build the request body for a generation call.
    pub(crate) fn build_body(&self, request: &GenerateRequest) -> OllamaGenerateRequest {
        OllamaGenerateRequest {
            model: self.config.model.clone(),
            prompt: request.prompt.clone(),
            system: request.system.clone(),
            keep_alive: self.config.keep_alive.clone(),
            stream: false,
        }
    }

    /// Parse an error response from Ollama.
    ///
    /// Error-bearing payloads are transient runtime failures and map to
    /// the retryable connection class; anything else is unexpected.
    pub(crate) fn parse_error(status: u16, body: &str) -> Error {
        if let Ok(error_response) = serde_json::from_str::<OllamaErrorResponse>(body) {
            return Error::connection(error_response.error);
        }
        Error::unexpected(format!("HTTP {status}: {body}"))
    }
}
