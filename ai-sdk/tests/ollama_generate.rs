//! Ollama provider tests against a mock HTTP server.
//!
//! These tests verify the generate call, its retry policy, and response
//! normalization using mock responses based on the official Ollama API
//! documentation.

#![allow(clippy::unwrap_used, clippy::panic)]

use ai_sdk::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A non-streaming generate response based on official Ollama API docs.
fn generate_response() -> serde_json::Value {
    json!({
        "model": "llama3.1",
        "created_at": "2024-05-04T19:22:45.499127Z",
        "response": "The sky is blue because of Rayleigh scattering.",
        "done": true,
        "done_reason": "stop",
        "context": [1, 2, 3],
        "total_duration": 5_043_500_667u64,
        "load_duration": 5_025_959u64,
        "prompt_eval_count": 26u64,
        "prompt_eval_duration": 325_953_000u64,
        "eval_count": 290u64,
        "eval_duration": 4_709_213_000u64
    })
}

/// An error response based on Ollama API behavior.
fn error_response() -> serde_json::Value {
    json!({
        "error": "model 'llama3.1' is currently loading"
    })
}

fn provider_for(server: &MockServer) -> Ollama {
    let config = OllamaConfig::new().base_url(server.uri()).model("llama3.1");
    Ollama::new(config).unwrap()
}

#[tokio::test]
async fn success_makes_exactly_one_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await
        .unwrap();

    assert_eq!(result.text, "The sky is blue because of Rayleigh scattering.");
    assert_eq!(result.model, "llama3.1");
    assert!(result.done);
    assert_eq!(result.done_reason.as_deref(), Some("stop"));
    assert_eq!(result.eval_count, Some(290));
    assert!(result.tokens_per_second > 0.0);
}

#[tokio::test]
async fn forwards_prompt_system_and_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "llama3.1",
            "prompt": "Why is the sky blue?",
            "system": "You are a physicist.",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let request = GenerateRequest::new("Why is the sky blue?").system("You are a physicist.");

    provider.generate_text(&request).await.unwrap();
}

#[tokio::test]
async fn empty_prompt_makes_zero_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response()))
        .expect(0)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate_text(&GenerateRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn retries_connection_failures_then_succeeds() {
    let server = MockServer::start().await;

    // Two transient failures, then a good response: the third attempt
    // inside the default budget of 3 must succeed.
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_response()))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await
        .unwrap();

    assert_eq!(result.text, "The sky is blue because of Rayleigh scattering.");
}

#[tokio::test]
async fn exhausts_retry_budget_and_reports_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_response()))
        .expect(3)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await
        .unwrap_err();

    let Error::ConnectionExhausted { attempts, source } = &err else {
        panic!("expected ConnectionExhausted, got {err:?}");
    };
    assert_eq!(*attempts, 3);
    assert!(source.to_string().contains("currently loading"));
}

#[tokio::test]
async fn honors_custom_retry_budget() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_response()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate_text(&GenerateRequest::new("Why is the sky blue?").max_retries(1))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::ConnectionExhausted { attempts: 1, .. }
    ));
}

#[tokio::test]
async fn error_payload_with_success_status_is_retried() {
    let server = MockServer::start().await;

    // Some proxies flatten runtime errors into 200 responses; the error
    // payload still marks the attempt as a transient failure.
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_response()))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await
        .unwrap();

    assert!(result.done);
}

#[tokio::test]
async fn malformed_payload_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unexpected(_)));
}

#[tokio::test]
async fn unreachable_server_exhausts_retries() {
    // Nothing listens on this port; every attempt is a connect failure.
    let config = OllamaConfig::new().base_url("http://127.0.0.1:1");
    let provider = Ollama::new(config).unwrap();

    let err = provider
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::ConnectionExhausted { attempts: 3, .. }
    ));
}

#[tokio::test]
async fn facade_delegates_to_ollama_provider() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response()))
        .expect(1)
        .mount(&server)
        .await;

    let model = AiModel::new(provider_for(&server));
    let result = model
        .generate_text(&GenerateRequest::new("Why is the sky blue?"))
        .await
        .unwrap();

    assert_eq!(result.to_string(), "The sky is blue because of Rayleigh scattering.");
    assert_eq!(model.provider_name(), "ollama");
}
