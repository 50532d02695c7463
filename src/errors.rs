//! Certmap error types.
//!
//! These errors never cross the public `fetch_badge` boundary. They exist so
//! each pipeline stage can report *why* it failed to the operator log before
//! the failure collapses into `None`.

use thiserror::Error;

/// Errors that can occur inside the badge pipeline.
#[derive(Debug, Error)]
pub enum CertmapError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The badge URL does not contain a recognizable badge identifier.
    #[error("Malformed badge URL: {0}")]
    MalformedInput(String),

    /// Connection, timeout or non-success status reaching the platform.
    #[error("Transport error for {uri}: {message}")]
    TransportFailure {
        /// URI that was requested.
        uri: String,
        /// Raw transport message.
        message: String,
    },

    /// The platform answered with something other than the expected object.
    #[error("Unexpected response from {uri}: {message}")]
    UnexpectedResponseShape {
        /// URI that was requested.
        uri: String,
        /// What was wrong with the body.
        message: String,
    },

    /// The claimed email does not hash to the assertion's recipient identity.
    #[error("Recipient identity mismatch")]
    IdentityMismatch,

    /// A record could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CertmapError {
    /// Short label for the failure kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config",
            Self::MalformedInput(_) => "malformed_input",
            Self::TransportFailure { .. } => "transport_failure",
            Self::UnexpectedResponseShape { .. } => "unexpected_response_shape",
            Self::IdentityMismatch => "identity_mismatch",
            Self::Serialization(_) => "serialization",
        }
    }
}
