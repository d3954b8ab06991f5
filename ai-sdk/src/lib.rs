//! ai-sdk - a uniform text-generation interface over local LLM runtimes
//!
//! This crate provides a small adapter layer: a provider dispatches a
//! generate call to an external runtime (currently Ollama), retries on
//! transient connection failure, and normalizes the raw response into a
//! typed result with derived metrics.

pub mod error;
pub mod generate;
pub mod model;
pub mod prelude;
pub mod providers;

pub use error::{Error, Result};
