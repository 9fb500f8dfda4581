//! Store Errors

use thiserror::Error;

/// Common result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Everything a store operation can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Non-success HTTP status; message comes from the body's `detail`
    /// or the operation's default
    #[error("{message}")]
    Api { status: u16, message: String },

    /// No bearer token held when one is required
    #[error("{0}")]
    MissingToken(&'static str),

    /// ME endpoint answered 401; the session has been cleared
    #[error("Session expired")]
    SessionExpired,

    #[error("Task not found")]
    TaskNotFound(i64),

    /// Rejected locally before any request was made
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api { status, message: message.into() }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
