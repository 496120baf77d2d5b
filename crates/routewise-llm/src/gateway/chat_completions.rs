//! OpenAI-compatible chat completions client
//!
//! Serves OpenRouter and Mistral, which share the `/chat/completions` wire
//! format. OpenRouter additionally receives its attribution headers.

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
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if non-empty
    pub(crate) fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Chat completions client for one provider
pub struct ChatCompletionsGateway {
    name: &'static str,
    client: Client,
    endpoint: ProviderEndpoint,
    settings: GatewayConfig,
    attribution: bool,
}

impl ChatCompletionsGateway {
    /// Client for OpenRouter, sending `X-Title` and `HTTP-Referer`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn openrouter(endpoint: ProviderEndpoint, settings: GatewayConfig) -> Result<Self> {
        Self::build("openrouter", endpoint, settings, true)
    }

    /// Client for Mistral
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn mistral(endpoint: ProviderEndpoint, settings: GatewayConfig) -> Result<Self> {
        Self::build("mistral", endpoint, settings, false)
    }

    fn build(
        name: &'static str,
        endpoint: ProviderEndpoint,
        settings: GatewayConfig,
        attribution: bool,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            name,
            client,
            endpoint,
            settings,
            attribution,
        })
    }

    async fn send(&self, model: &ModelDescriptor, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.endpoint.base_url);
        let body = ChatRequest {
            model: &model.id,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&body);

        if self.attribution {
            if let Some(app_name) = &self.settings.app_name {
                request = request.header("X-Title", app_name);
            }
            if let Some(site_url) = &self.settings.site_url {
                request = request.header("HTTP-Referer", site_url);
            }
        }

        debug!(url = %url, "Sending chat completion request");

        let timeout_ms = self.settings.timeout_ms();
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(&e, timeout_ms))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(&e, timeout_ms))?;

        if !status.is_success() {
            return Err(status_error(status, &text, model));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| Error::MalformedResponse(format!("invalid response body: {e}")))?;
        parsed.into_content().ok_or_else(|| {
            Error::MalformedResponse("no message content in response".to_string())
        })
    }
}

#[async_trait::async_trait]
impl ResponseGateway for ChatCompletionsGateway {
    fn name(&self) -> &str {
        self.name
    }

    #[instrument(skip(self, model, prompt, cancel), fields(gateway = self.name, model = %model.id))]
    async fn generate(
        &self,
        model: &ModelDescriptor,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        run_with_budget(self.send(model, prompt), self.settings.timeout, cancel).await
    }
}
