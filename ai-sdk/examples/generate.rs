//! Basic text generation against a local Ollama server.
//!
//! Demonstrates the simplest possible use: construct a provider for a
//! fixed model, send one prompt, print the generated text.
//!
//! ```bash
//! ollama pull llama3.1
//! cargo run --example generate
//! ```

#![allow(clippy::print_stdout)]

use ai_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let ollama = Ollama::with_model("llama3.1")?;

    let result = ollama
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await?;
    println!("{result}");

    Ok(())
}
