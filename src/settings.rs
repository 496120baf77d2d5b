//! Application settings and loading
//!
//! Layers, lowest priority first: the embedded `config/default.toml`, an
//! optional `config/local.toml`, then `ROUTEWISE_*` environment variables.

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use routewise_llm::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default selection mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Auto,
    Manual,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub mode: ModeSetting,
    #[serde(default)]
    pub default_model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub site_url: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            app_name: None,
            site_url: None,
        }
    }
}

impl GatewaySettings {
    /// Request settings for the provider clients
    pub fn to_gateway_config(&self) -> GatewayConfig {
        let mut config = GatewayConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);
        config.app_name = self.app_name.clone();
        config.site_url = self.site_url.clone();
        config
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "routewise=info,routewise_llm=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Load configuration from files and environment
pub fn load_config() -> Result<AppConfig> {
    let config = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. Local overrides (optional)
        .add_source(File::with_name("config/local").required(false))
        // 3. Environment variables (highest priority)
        // ROUTEWISE_GATEWAY__TIMEOUT_SECS: single `_` after the prefix, `__` between keys
        .add_source(
            Environment::with_prefix("ROUTEWISE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_embedded_defaults() {
        let config = parse(DEFAULT_CONFIG);
        assert_eq!(config.selection.mode, ModeSetting::Auto);
        assert!(config.selection.default_model.is_none());
        assert_eq!(config.gateway.timeout_secs, 30);
        assert_eq!(config.gateway.max_tokens, 1024);
        assert_eq!(config.gateway.app_name.as_deref(), Some("Routewise"));
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let config = parse("[selection]\nmode = \"manual\"\n");
        assert_eq!(config.selection.mode, ModeSetting::Manual);
        assert_eq!(config.gateway.timeout_secs, 30);
        assert_eq!(config.logging.filter, default_filter());
    }

    #[test]
    fn test_gateway_config_conversion() {
        let settings = GatewaySettings {
            timeout_secs: 5,
            temperature: 0.2,
            max_tokens: 256,
            app_name: None,
            site_url: Some("https://example.com".to_string()),
        };
        let gateway = settings.to_gateway_config();
        assert_eq!(gateway.timeout, Duration::from_secs(5));
        assert_eq!(gateway.temperature, 0.2);
        assert_eq!(gateway.max_tokens, 256);
        assert_eq!(gateway.app_name, None);
        assert_eq!(gateway.site_url.as_deref(), Some("https://example.com"));
    }
}
