//! Generate-text types, traits, and utilities.
//!
//! This module provides:
//! - [`GenerateRequest`]: parameters for a single generation call
//! - [`GenerationResult`]: the normalized response value
//! - [`TextProvider`]: core trait for text-generation backends
//!
//! # Example
//!
//! ```rust,ignore
//! use ai_sdk::prelude::*;
//!
//! let request = GenerateRequest::new("Why is the sky blue?")
//!     .system("You are a physicist.")
//!     .max_retries(5);
//!
//! let result = provider.generate_text(&request).await?;
//! println!("{result}");
//! ```

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of attempts for a generation call.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// A text-generation request.
///
/// Constructed per call and consumed by dispatch; no state is retained
/// across calls.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The prompt to generate from. Must be non-empty.
    pub prompt: String,

    /// Optional system preamble describing the conversation context.
    pub system: Option<String>,

    /// Maximum number of attempts on connection failure (at least 1).
    pub max_retries: u32,
}

impl GenerateRequest {
    /// Creates a request for the given prompt.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Sets the system preamble.
    #[must_use]
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Sets the retry budget for connection failures.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self::new("")
    }
}

/// The normalized result of a generation call.
///
/// Constructed once from the runtime's raw response and read-only
/// thereafter. Durations are in nanoseconds; metric fields the runtime did
/// not report are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Model that produced the response.
    pub model: String,
    /// The generated text.
    pub text: String,
    /// Whether generation ran to completion.
    pub done: bool,
    /// Why generation stopped (e.g. "stop", "length").
    pub done_reason: Option<String>,
    /// Token context blob for conversational follow-ups.
    pub context: Option<Vec<i64>>,
    /// Total wall time of the call.
    pub total_duration: Option<u64>,
    /// Time spent loading the model.
    pub load_duration: Option<u64>,
    /// Number of tokens in the prompt.
    pub prompt_eval_count: Option<u64>,
    /// Time spent evaluating the prompt.
    pub prompt_eval_duration: Option<u64>,
    /// Number of tokens generated.
    pub eval_count: Option<u64>,
    /// Time spent generating.
    pub eval_duration: Option<u64>,
    /// Generation throughput, derived from `eval_count` and
    /// `eval_duration`; `0.0` when the runtime did not report timings.
    pub tokens_per_second: f64,
}

impl GenerationResult {
    /// Exports the result as `{ "text": ..., "meta": { ... } }`.
    ///
    /// `eval_duration` is consumed by the derived `tokens_per_second`
    /// metric and does not appear in `meta`. Fields the runtime did not
    /// report export as `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "text": self.text,
            "meta": {
                "model": self.model,
                "done": self.done,
                "done_reason": self.done_reason,
                "context": self.context,
                "total_duration": self.total_duration,
                "load_duration": self.load_duration,
                "prompt_eval_count": self.prompt_eval_count,
                "prompt_eval_duration": self.prompt_eval_duration,
                "eval_count": self.eval_count,
                "tokens_per_second": self.tokens_per_second,
            }
        })
    }
}

impl std::fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Stream of generated text fragments.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Trait for providers that support text generation.
///
/// This is the capability set the [`AiModel`](crate::model::AiModel) facade
/// is polymorphic over: every backend implements `generate_text`, and may
/// additionally implement `stream_response`.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for the given request and return the normalized
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty prompt,
    /// [`Error::ConnectionExhausted`] when the retry budget is consumed by
    /// connection failures, and [`Error::Unexpected`] for any other
    /// failure of the underlying call.
    async fn generate_text(&self, request: &GenerateRequest) -> Result<GenerationResult>;

    /// Generate a streaming response.
    ///
    /// # Errors
    ///
    /// By default this returns [`Error::NotSupported`]; providers that
    /// support streaming override it.
    async fn stream_response(&self, request: &GenerateRequest) -> Result<TextStream> {
        let _ = request;
        Err(Error::not_supported("streaming"))
    }

    /// Get the name of this provider, for error messages and logging.
    fn provider_name(&self) -> &'static str;

    /// Get the model identifier this provider dispatches to.
    fn default_model(&self) -> &str;

    /// Check if this provider supports streaming.
    fn supports_streaming(&self) -> bool {
        false
    }
}

/// Extension trait for [`TextProvider`] with convenience methods.
#[async_trait]
pub trait TextProviderExt: TextProvider {
    /// Send a bare prompt and get the generated text back.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`TextProvider::generate_text`].
    async fn complete(&self, prompt: &str) -> Result<String> {
        let result = self.generate_text(&GenerateRequest::new(prompt)).await?;
        Ok(result.text)
    }
}

impl<T: TextProvider> TextProviderExt for T {}

/// Type alias for a boxed [`TextProvider`].
pub type BoxedTextProvider = Box<dyn TextProvider>;

/// Type alias for an Arc-wrapped [`TextProvider`].
pub type SharedTextProvider = std::sync::Arc<dyn TextProvider>;
