//! Ollama provider implementation.
//!
//! This module provides integration with Ollama's local LLM server,
//! supporting models like Llama 3, Mistral, Qwen, and more.
//!
//! # Example
//!
//! ```rust,ignore
//! use ai_sdk::prelude::*;
//!
//! // Connect to the local Ollama server (default: http://localhost:11434)
//! let provider = Ollama::with_model(LLAMA3_1)?;
//! let result = provider.generate_text(&GenerateRequest::new("Hello!")).await?;
//! println!("{result}");
//! ```
//!
//! # Features
//!
//! - Local inference with no API key required
//! - Bounded retry on transient connection failures
//! - Response metadata extraction (token counts, durations, throughput)

mod client;
mod config;
mod generate;
mod response;

pub use client::Ollama;
pub use config::OllamaConfig;
pub use response::GenerateResponse;

/// Llama 3.2 model.
pub const LLAMA3_2: &str = "llama3.2";
/// Llama 3.1 model.
pub const LLAMA3_1: &str = "llama3.1";
/// Mistral model.
pub const MISTRAL: &str = "mistral";
/// Qwen 3 model.
pub const QWEN3: &str = "qwen3";
/// Gemma 2 model from Google.
pub const GEMMA2: &str = "gemma2";
