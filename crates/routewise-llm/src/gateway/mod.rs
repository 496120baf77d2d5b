//! Response Gateway - send a prompt to the selected model
//!
//! Every client classifies failures the same way: an unknown model is
//! [`Error::InvalidModel`], any other rejection is
//! [`Error::ProviderUnavailable`], an unusable body is
//! [`Error::MalformedResponse`], an expired budget is [`Error::Timeout`] and
//! a fired token is [`Error::Cancelled`]. Nothing here retries.
//!
//! # Module Structure
//!
//! - `config`: GatewayConfig and provider credentials
//! - `chat_completions`: OpenAI-compatible client (OpenRouter, Mistral)
//! - `gemini`: Google Generative Language client
//! - `dispatch`: ProviderGateway routing by provider
//! - `mock`: MockGateway for tests

mod chat_completions;
mod config;
mod dispatch;
mod gemini;
mod mock;


pub use chat_completions::ChatCompletionsGateway;
pub use config::{
    GatewayConfig, ProviderCredentials, ProviderEndpoint, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT, GEMINI_BASE_URL, MISTRAL_BASE_URL, OPENROUTER_BASE_URL,
};
pub use dispatch::ProviderGateway;
pub use gemini::GeminiGateway;
pub use mock::MockGateway;

use crate::catalog::ModelDescriptor;
use crate::error::{Error, Result};
use crate::util::sanitize_api_error;
use reqwest::StatusCode;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Something that can answer a prompt with a given model
#[async_trait::async_trait]
pub trait ResponseGateway: Send + Sync {
    /// Client name for logs
    fn name(&self) -> &str;

    /// Generate a response to `prompt` with `model`
    ///
    /// Resolves to [`Error::Cancelled`] as soon as `cancel` fires, dropping
    /// any in-flight request.
    async fn generate(
        &self,
        model: &ModelDescriptor,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String>;
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Run `call` under a time budget, aborting when `cancel` fires
pub(crate) async fn run_with_budget<T, F>(
    call: F,
    budget: Duration,
    cancel: &CancellationToken,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(Error::Cancelled),
        outcome = tokio::time::timeout(budget, call) => match outcome {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(u64::try_from(budget.as_millis()).unwrap_or(u64::MAX))),
        },
    }
}

/// Map a transport failure
pub(crate) fn transport_error(err: &reqwest::Error, timeout_ms: u64) -> Error {
    if err.is_timeout() {
        Error::Timeout(timeout_ms)
    } else {
        Error::Network(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct FlatError {
    message: String,
}

/// Map a non-2xx status and its body
pub(crate) fn status_error(status: StatusCode, body: &str, model: &ModelDescriptor) -> Error {
    if status == StatusCode::NOT_FOUND {
        return Error::InvalidModel(format!("model {} is not available", model.name));
    }

    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .or_else(|_| serde_json::from_str::<FlatError>(body).map(|e| e.message))
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            }
        });
    Error::ProviderUnavailable(sanitize_api_error(&message))
}
