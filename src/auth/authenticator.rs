//! Authentication strategies for the token endpoint.
//!
//! A strategy performs one network round-trip and reports exactly once:
//! either a decoded [`Token`] or an [`AuthError`] naming what went wrong.
//! Transport failures and credential rejections stay distinct so the
//! dispatch pipeline can route them differently.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::grant::{AppCredentials, GrantParams, TOKEN_ENDPOINT};
use super::types::Token;
use crate::error::RestError;

const TOKEN_TIMEOUT: Duration = Duration::from_secs(30);
const TOKEN_MAX_REDIRECTS: usize = 3;

/// Errors from one authentication attempt.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The token request never produced a response.
    #[error("token request failed in transit: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint answered with a non-200 status.
    #[error("token endpoint rejected the grant with status {status}")]
    Rejected {
        /// Status returned by the token endpoint.
        status: StatusCode,
        /// Raw response body from the token endpoint.
        body: String,
    },

    /// A 200 response carried a body that was not a token payload.
    #[error("token response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A strategy that can obtain an access token.
///
/// The dispatch pipeline is parameterized over this trait and never assumes
/// a specific grant type; any implementation with one `authenticate`
/// round-trip fits (including test fakes and externally-obtained tokens).
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Perform one authentication round-trip.
    async fn authenticate(&self) -> Result<Token, AuthError>;
}

/// Password-grant strategy: trades a username/password pair for a token.
pub struct PasswordAuthenticator {
    credentials: AppCredentials,
    username: String,
    password: String,
    token_url: String,
    http: reqwest::Client,
}

impl PasswordAuthenticator {
    /// Create a password-grant strategy for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the HTTP transport cannot be built.
    pub fn new(
        credentials: AppCredentials,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, RestError> {
        Ok(Self {
            credentials,
            username: username.into(),
            password: password.into(),
            token_url: TOKEN_ENDPOINT.to_string(),
            http: token_client()?,
        })
    }

    /// Override the token endpoint URL.
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }
}

#[async_trait]
impl Authenticator for PasswordAuthenticator {
    async fn authenticate(&self) -> Result<Token, AuthError> {
        let params = self.credentials.password_grant(&self.username, &self.password);
        fetch_token(&self.http, &self.token_url, &params).await
    }
}

/// Authorization-code strategy: trades a consent-flow code for a token.
pub struct CodeAuthenticator {
    credentials: AppCredentials,
    code: String,
    token_url: String,
    http: reqwest::Client,
}

impl CodeAuthenticator {
    /// Create a code-grant strategy for the given authorization code.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the HTTP transport cannot be built.
    pub fn new(credentials: AppCredentials, code: impl Into<String>) -> Result<Self, RestError> {
        Ok(Self {
            credentials,
            code: code.into(),
            token_url: TOKEN_ENDPOINT.to_string(),
            http: token_client()?,
        })
    }

    /// Override the token endpoint URL.
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }
}

#[async_trait]
impl Authenticator for CodeAuthenticator {
    async fn authenticate(&self) -> Result<Token, AuthError> {
        let params = self.credentials.bearer_grant(&self.code);
        fetch_token(&self.http, &self.token_url, &params).await
    }
}

/// One POST of a grant to the token endpoint.
///
/// Only an exact 200 yields a token; every other status is a rejection
/// carrying the endpoint's status and body.
async fn fetch_token(
    http: &reqwest::Client,
    token_url: &str,
    params: &GrantParams,
) -> Result<Token, AuthError> {
    debug!(url = %token_url, "requesting access token");

    let response = http.post(token_url).form(params).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        warn!(%status, "token endpoint rejected the grant");
        return Err(AuthError::Rejected { status, body });
    }

    response.json::<Token>().await.map_err(AuthError::Decode)
}

fn token_client() -> Result<reqwest::Client, RestError> {
    reqwest::Client::builder()
        .timeout(TOKEN_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(TOKEN_MAX_REDIRECTS))
        .user_agent(concat!("wpcom-rest/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| RestError::Config(format!("failed to build HTTP client: {e}")))
}
