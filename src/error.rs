//! Error types for wallet service operations.

/// Errors that can occur when interacting with the wallet service.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Client configuration was rejected at construction time.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// HTTP request failed to complete.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize request data.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The service reported an application-level failure.
    ///
    /// The display form is the service message alone, so callers can
    /// substring-match on it; the numeric code is available via
    /// [`WalletError::code`].
    #[error("{message}")]
    Coded {
        /// Application error code from the response envelope.
        code: i64,
        /// Human-readable reason from the response envelope.
        message: String,
    },
}

impl WalletError {
    /// Returns the application error code for [`WalletError::Coded`]
    /// errors, `None` for every other variant.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Coded { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn coded(code: i64, message: impl Into<String>) -> Self {
        Self::Coded {
            code,
            message: message.into(),
        }
    }
}
