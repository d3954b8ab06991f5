//! Ollama generate response normalization.

use serde::{Deserialize, Serialize};

use crate::generate::GenerationResult;

/// Raw response from the `/api/generate` endpoint.
///
/// Every field tolerates absence: a key the runtime did not send
/// deserializes to its default, never an error. Malformed value types are
/// deserialization failures and surface to the caller unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The model name used for generation.
    #[serde(default)]
    pub model: String,
    /// The generated text.
    #[serde(default)]
    pub response: String,
    /// Indicates whether generation ran to completion.
    #[serde(default)]
    pub done: bool,
    /// Why generation finished. Present only when `done` is `true`.
    #[serde(default)]
    pub done_reason: Option<String>,
    /// An encoding of the conversation context, usable in a follow-up
    /// request to maintain conversational memory.
    #[serde(default)]
    pub context: Option<Vec<i64>>,
    /// Total wall time of the call (nanoseconds).
    #[serde(default)]
    pub total_duration: Option<u64>,
    /// Time spent loading the model (nanoseconds).
    #[serde(default)]
    pub load_duration: Option<u64>,
    /// Number of tokens in the prompt.
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    /// Time spent evaluating the prompt (nanoseconds).
    #[serde(default)]
    pub prompt_eval_duration: Option<u64>,
    /// Number of tokens generated.
    #[serde(default)]
    pub eval_count: Option<u64>,
    /// Time spent generating (nanoseconds).
    #[serde(default)]
    pub eval_duration: Option<u64>,
}

impl From<GenerateResponse> for GenerationResult {
    fn from(raw: GenerateResponse) -> Self {
        let tokens_per_second = match raw.eval_duration {
            Some(duration) if duration > 0 => {
                raw.eval_count.unwrap_or(0) as f64 / duration as f64 * 1e9
            }
            _ => 0.0,
        };

        Self {
            model: raw.model,
            text: raw.response,
            done: raw.done,
            done_reason: raw.done_reason,
            context: raw.context,
            total_duration: raw.total_duration,
            load_duration: raw.load_duration,
            prompt_eval_count: raw.prompt_eval_count,
            prompt_eval_duration: raw.prompt_eval_duration,
            eval_count: raw.eval_count,
            eval_duration: raw.eval_duration,
            tokens_per_second,
        }
    }
}
