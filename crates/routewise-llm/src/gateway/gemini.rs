//! Google Generative Language client

use super::config::{GatewayConfig, ProviderEndpoint};
use super::{run_with_budget, status_error, transport_error, ResponseGateway};
use crate::catalog::ModelDescriptor;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, if any
    pub(crate) fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Gemini `generateContent` client
pub struct GeminiGateway {
    client: Client,
    endpoint: ProviderEndpoint,
    settings: GatewayConfig,
}

impl GeminiGateway {
    /// Create a client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(endpoint: ProviderEndpoint, settings: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }

    async fn send(&self, model: &ModelDescriptor, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.base_url, model.id
        );
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_tokens,
            },
        };

        debug!(url = %url, "Sending generateContent request");

        let timeout_ms = self.settings.timeout_ms();
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.endpoint.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(&e.without_url(), timeout_ms))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(&e.without_url(), timeout_ms))?;

        if !status.is_success() {
            return Err(status_error(status, &text, model));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| Error::MalformedResponse(format!("invalid response body: {e}")))?;
        parsed
            .into_text()
            .ok_or_else(|| Error::MalformedResponse("no candidate text in response".to_string()))
    }
}

#[async_trait::async_trait]
impl ResponseGateway for GeminiGateway {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, model, prompt, cancel), fields(model = %model.id))]
    async fn generate(
        &self,
        model: &ModelDescriptor,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        run_with_budget(self.send(model, prompt), self.settings.timeout, cancel).await
    }
}
