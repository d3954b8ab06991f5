//! Mock provider implementation for testing.
//!
//! This module provides a simple provider that returns predefined
//! responses, useful for unit testing without a running runtime.

use async_trait::async_trait;

use crate::error::Result;
use crate::generate::{GenerateRequest, GenerationResult, TextProvider};

/// A simple mock provider for testing.
///
/// Returns predefined responses in sequence, cycling through them.
///
/// # Example
///
/// ```rust,ignore
/// use ai_sdk::prelude::*;
///
/// let provider = MockProvider::new(vec!["Hello!".to_string(), "Goodbye!".to_string()]);
/// // First call returns "Hello!", second returns "Goodbye!", third "Hello!" again...
/// ```
#[derive(Debug)]
pub struct MockProvider {
    model_id: String,
    responses: Vec<String>,
    response_index: std::sync::atomic::AtomicUsize,
}

impl MockProvider {
    /// Create a new mock provider with predefined responses.
    #[must_use]
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            model_id: "mock-model".to_owned(),
            responses,
            response_index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a mock provider with a custom model ID.
    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }
}

#[async_trait]
impl TextProvider for MockProvider {
    async fn generate_text(&self, _request: &GenerateRequest) -> Result<GenerationResult> {
        let index = self
            .response_index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let text = if self.responses.is_empty() {
            "No response".to_owned()
        } else {
            self.responses
                .get(index % self.responses.len())
                .cloned()
                .unwrap_or_else(|| "No response".to_owned())
        };

        Ok(GenerationResult {
            model: self.model_id.clone(),
            text,
            done: true,
            ..GenerationResult::default()
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn default_model(&self) -> &str {
        &self.model_id
    }
}
