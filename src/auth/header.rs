//! Bearer authorization header decoration.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::warn;

/// Stamps `Authorization: Bearer <token>` onto an outbound request.
///
/// Decoration is idempotent: applying twice yields the same single header
/// as applying once. With no token held, any existing authorization header
/// is removed instead, so a header stamped by a previous attempt never
/// leaks into an unauthenticated request.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: Option<String>,
}

impl BearerAuth {
    /// Create a decorator for the given token value.
    ///
    /// An empty string is treated the same as an absent token.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()) }
    }

    /// Apply the decoration to a header map.
    pub fn apply(&self, headers: &mut HeaderMap) {
        match &self.token {
            None => {
                headers.remove(AUTHORIZATION);
            }
            Some(token) => {
                if headers.contains_key(AUTHORIZATION) {
                    return;
                }
                match HeaderValue::from_str(&format!("Bearer {token}")) {
                    Ok(value) => {
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(err) => {
                        warn!(error = %err, "access token is not a valid header value");
                    }
                }
            }
        }
    }
}
