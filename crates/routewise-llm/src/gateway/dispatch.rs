//! Dispatch by model provider

use super::chat_completions::ChatCompletionsGateway;
use super::config::{GatewayConfig, ProviderCredentials};
use super::gemini::GeminiGateway;
use super::ResponseGateway;
use crate::catalog::{ModelDescriptor, Provider};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Routes each request to the client registered for the model's provider
#[derive(Default)]
pub struct ProviderGateway {
    gateways: HashMap<Provider, Arc<dyn ResponseGateway>>,
}

impl ProviderGateway {
    /// Create a gateway with no providers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every provider `credentials` has a key for
    ///
    /// # Errors
    /// Returns an error if an HTTP client cannot be created.
    pub fn from_credentials(
        credentials: &ProviderCredentials,
        settings: &GatewayConfig,
    ) -> Result<Self> {
        let mut gateway = Self::new();
        if let Some(endpoint) = &credentials.openrouter {
            gateway.register(
                Provider::OpenRouter,
                Arc::new(ChatCompletionsGateway::openrouter(
                    endpoint.clone(),
                    settings.clone(),
                )?),
            );
        }
        if let Some(endpoint) = &credentials.mistral {
            gateway.register(
                Provider::Mistral,
                Arc::new(ChatCompletionsGateway::mistral(
                    endpoint.clone(),
                    settings.clone(),
                )?),
            );
        }
        if let Some(endpoint) = &credentials.google {
            gateway.register(
                Provider::Google,
                Arc::new(GeminiGateway::new(endpoint.clone(), settings.clone())?),
            );
        }
        Ok(gateway)
    }

    /// Register (or replace) the client for `provider`
    pub fn register(&mut self, provider: Provider, gateway: Arc<dyn ResponseGateway>) {
        debug!(provider = %provider, gateway = gateway.name(), "Registered gateway");
        self.gateways.insert(provider, gateway);
    }

    /// Builder form of [`Self::register`]
    #[must_use]
    pub fn with_gateway(mut self, provider: Provider, gateway: Arc<dyn ResponseGateway>) -> Self {
        self.register(provider, gateway);
        self
    }

    /// Whether `provider` has a client
    #[must_use]
    pub fn has_provider(&self, provider: Provider) -> bool {
        self.gateways.contains_key(&provider)
    }

    /// Registered providers
    #[must_use]
    pub fn providers(&self) -> Vec<Provider> {
        let mut providers: Vec<Provider> = self.gateways.keys().copied().collect();
        providers.sort_by_key(|p| p.as_str());
        providers
    }
}

#[async_trait::async_trait]
impl ResponseGateway for ProviderGateway {
    fn name(&self) -> &str {
        "dispatch"
    }

    async fn generate(
        &self,
        model: &ModelDescriptor,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let gateway = self.gateways.get(&model.provider).ok_or_else(|| {
            Error::ProviderUnavailable(format!("unsupported model provider: {}", model.provider))
        })?;
        gateway.generate(model, prompt, cancel).await
    }
}
