//! Error types for REST operations.
//!
//! The taxonomy keeps three failure origins distinct so callers can tell a
//! retryable network problem from a permanent credential rejection:
//!
//! - [`RestError::Transport`] — no response reached the client at all;
//! - [`RestError::AuthRejected`] — the token endpoint answered non-200;
//! - [`RestError::Upstream`] — the resource itself answered a non-success
//!   status, passed through untranslated.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the request pipeline.
#[derive(Debug, Error)]
pub enum RestError {
    /// No response was received (connection, DNS, TLS, or timeout).
    /// The underlying cause is surfaced unmodified.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint rejected the authentication attempt.
    /// The original request was never executed.
    #[error("authentication rejected: token endpoint returned {status}")]
    AuthRejected {
        /// Status returned by the token endpoint.
        status: StatusCode,
        /// Raw response body from the token endpoint.
        body: String,
    },

    /// The resource returned a non-success status after (any) authentication.
    #[error("request failed with status {status}")]
    Upstream {
        /// Status returned by the resource.
        status: StatusCode,
        /// Raw response body from the resource.
        body: String,
    },

    /// A success response carried a body that could not be deserialized.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// Client construction or configuration problem.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RestError {
    /// HTTP status associated with this error, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::AuthRejected { status, .. } | Self::Upstream { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Decode(_) | Self::Config(_) => None,
        }
    }

    /// Whether this failure came from the token endpoint rather than the
    /// resource or the network.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::AuthRejected { .. })
    }
}
