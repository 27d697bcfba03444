//! Error types for roastline.

pub mod unified;

pub use unified::{ErrorCategory, FallbackReason, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all roastline operations.
///
/// Everything except [`RoastError::InvalidInput`] is a generation-time
/// condition that the orchestrator converts into a fallback verse.
#[derive(Error, Debug)]
pub enum RoastError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Provider error: {provider}: {message}")]
    Provider { provider: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RoastError {
    /// Create an API error from a status code and body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(_) => ErrorCategory::InvalidInput,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                _ => ErrorCategory::Transport,
            },
            Self::Network(_) | Self::Provider { .. } | Self::Serialization(_) => {
                ErrorCategory::Transport
            }
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error came from the generation call itself rather than
    /// from the caller. Such errors are absorbed into a fallback verse.
    pub fn is_transport(&self) -> bool {
        !matches!(
            self.category(),
            ErrorCategory::InvalidInput | ErrorCategory::Configuration
        )
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::InvalidInput => RecoverySuggestion::FixCallerInput,
            ErrorCategory::Authentication => RecoverySuggestion::CheckCredentials,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::Timeout => RecoverySuggestion::IncreaseTimeout,
            _ => RecoverySuggestion::UseFallback,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RoastError>;
