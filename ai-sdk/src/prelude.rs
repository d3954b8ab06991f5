//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types and traits for easy access.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ai_sdk::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::generate::{
    BoxedTextProvider, DEFAULT_MAX_RETRIES, GenerateRequest, GenerationResult,
    SharedTextProvider, TextProvider, TextProviderExt, TextStream,
};
pub use crate::model::AiModel;
pub use crate::providers::{MockProvider, Ollama, OllamaConfig};
