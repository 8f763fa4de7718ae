//! Error types for the Wall of Shame skill.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the conversational core.
///
/// Intent handling itself never fails: malformed or unknown intents degrade to
/// a help or "unsupported" response. These errors come from the platform
/// plumbing around it.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request rejected by the identity gate
    #[error("Unauthorized request: {0}")]
    Unauthorized(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
