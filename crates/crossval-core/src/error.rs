//! Error types for crossval

/// Result type alias using crossval's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for crossval operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed harness configuration, detected before touching the oracle
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure surfaced by an oracle call (reset, learn, or classify)
    #[error("oracle error: {0}")]
    Oracle(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new oracle error
    pub fn oracle(msg: impl Into<String>) -> Self {
        Self::Oracle(msg.into())
    }
}
