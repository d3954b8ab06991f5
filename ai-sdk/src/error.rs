//! Error types for text-generation operations.
//!
//! [`Error`] covers the failure modes of a generate call: invalid input,
//! transient connection failures (retryable), an exhausted retry budget,
//! and everything else the runtime can throw back.

/// Result type alias for ai-sdk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for text-generation operations.
///
/// Each variant represents a distinct failure mode, enabling callers to
/// pattern-match on specific cases (e.g., retrying transient errors).
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A request argument failed validation before dispatch.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transient connection failure from the runtime.
    #[error("connection error: {0}")]
    Connection(String),

    /// Every attempt in the retry budget failed with a connection error.
    #[error("connection failed after {attempts} attempts: {source}")]
    ConnectionExhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// The last underlying connection failure.
        #[source]
        source: Box<Error>,
    },

    /// Any other failure from the runtime call.
    #[error("unexpected error: {0}")]
    Unexpected(String),

    /// Capability not implemented by the provider.
    #[error("not supported: {0}")]
    NotSupported(String),
}

impl Error {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a connection exhausted error wrapping the last failure.
    #[must_use]
    pub fn exhausted(attempts: u32, source: Self) -> Self {
        Self::ConnectionExhausted {
            attempts,
            source: Box::new(source),
        }
    }

    /// Create an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Create a not supported error.
    #[must_use]
    pub fn not_supported(capability: impl Into<String>) -> Self {
        Self::NotSupported(capability.into())
    }

    /// Check if this is a retryable error.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::connection("request timed out")
        } else if err.is_connect() {
            Self::connection(format!("connection failed: {err}"))
        } else {
            Self::unexpected(err.to_string())
        }
    }
}
