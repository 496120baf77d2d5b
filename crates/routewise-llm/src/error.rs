//! Error types for routewise-llm

use thiserror::Error;

/// Routing error type
#[derive(Debug, Error)]
pub enum Error {
    /// A model id does not exist in the catalog
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Catalog or decision tree failed validation
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Provider not configured
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// Provider rejected or failed the request
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider does not know the requested model
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// Timeout
    #[error("timeout after {0}ms")]
    Timeout(u64),

    /// Caller cancelled the request
    #[error("request was cancelled")]
    Cancelled,

    /// Provider answered with an unexpected payload
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Network error
    #[error("network error: {0}")]
    Network(String),
}

impl Error {
    /// Whether this error was caused by the caller's cancellation token
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
