//! Gateway settings and provider credentials

use crate::error::{Error, Result};
use crate::util::mask_api_key;
use std::fmt;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// OpenRouter API base URL
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Mistral API base URL
pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Google Generative Language API base URL
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Per-call budget when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sampling temperature sent with every request
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Completion length cap sent with every request
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

// ============================================================================
// Gateway settings
// ============================================================================

/// Request settings shared by every provider client
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Budget for one call, transport included
    pub timeout: Duration,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum completion tokens
    pub max_tokens: u32,
    /// Sent as `X-Title` to OpenRouter
    pub app_name: Option<String>,
    /// Sent as `HTTP-Referer` to OpenRouter
    pub site_url: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            app_name: Some("Routewise".to_string()),
            site_url: None,
        }
    }
}

impl GatewayConfig {
    /// Set the per-call budget
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion length cap
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the app name
    #[must_use]
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set the site URL
    #[must_use]
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = Some(url.into());
        self
    }

    pub(crate) fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

// ============================================================================
// Credentials
// ============================================================================

/// API key and base URL of one provider
#[derive(Clone)]
pub struct ProviderEndpoint {
    /// API key
    pub api_key: String,
    /// Base URL without trailing slash
    pub base_url: String,
}

impl fmt::Debug for ProviderEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEndpoint")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderEndpoint {
    /// Create an endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `key_var` (falling back to `fallback_var`) and `url_var`
    ///
    /// # Errors
    /// Returns [`Error::NotConfigured`] when no key variable is set.
    pub fn from_env(
        key_var: &str,
        fallback_var: Option<&str>,
        url_var: &str,
        default_url: &str,
    ) -> Result<Self> {
        let api_key = std::env::var(key_var)
            .ok()
            .or_else(|| fallback_var.and_then(|var| std::env::var(var).ok()))
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::NotConfigured(format!("{key_var} not set")))?;
        let base_url = std::env::var(url_var).unwrap_or_else(|_| default_url.to_string());
        Ok(Self::new(api_key, base_url))
    }
}

/// Credentials for every provider the gateway can reach
///
/// A missing key leaves that provider unregistered; requests for its models
/// then fail with [`Error::ProviderUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    /// OpenRouter endpoint
    pub openrouter: Option<ProviderEndpoint>,
    /// Mistral endpoint
    pub mistral: Option<ProviderEndpoint>,
    /// Google endpoint
    pub google: Option<ProviderEndpoint>,
}

impl ProviderCredentials {
    /// Read credentials from the environment
    ///
    /// `OPENROUTER_API_KEY`, `MISTRAL_API_KEY` and `GOOGLE_API_KEY` (or
    /// `GEMINI_API_KEY`), each with an optional `*_BASE_URL` override.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            openrouter: ProviderEndpoint::from_env(
                "OPENROUTER_API_KEY",
                None,
                "OPENROUTER_BASE_URL",
                OPENROUTER_BASE_URL,
            )
            .ok(),
            mistral: ProviderEndpoint::from_env(
                "MISTRAL_API_KEY",
                None,
                "MISTRAL_BASE_URL",
                MISTRAL_BASE_URL,
            )
            .ok(),
            google: ProviderEndpoint::from_env(
                "GOOGLE_API_KEY",
                Some("GEMINI_API_KEY"),
                "GOOGLE_BASE_URL",
                GEMINI_BASE_URL,
            )
            .ok(),
        }
    }

    /// Whether no provider is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.openrouter.is_none() && self.mistral.is_none() && self.google.is_none()
    }
}
