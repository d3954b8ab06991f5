//! Text-generation provider implementations.
//!
//! Each backend is organized into its own submodule and implements the
//! [`TextProvider`](crate::generate::TextProvider) trait.
//!
//! # Available Backends
//!
//! - [`ollama`] - Ollama local LLM server
//! - [`mock`] - canned-response provider for tests

pub mod mock;
pub mod ollama;

pub use mock::MockProvider;
pub use ollama::{Ollama, OllamaConfig};
