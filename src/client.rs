//! WordPress.com REST client with deferred authentication.
//!
//! [`WpcomClient`] exposes typed verbs plus endpoint conveniences, and
//! funnels every call through [`WpcomClient::dispatch`] so the caller never
//! has to care whether the session is authenticated yet.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::auth::{AuthError, Authenticator, BearerAuth};
use crate::error::RestError;
use crate::models::{Me, Notes};
use crate::request::{resource_url, PendingRequest};

/// Fixed REST API v1 base URL.
pub const REST_API_ENDPOINT: &str = "https://public-api.wordpress.com/rest/v1/";

/// Field selection injected into notification list calls.
const NOTIFICATION_FIELDS: &str = "id,type,unread,body,subject,timestamp";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_REDIRECTS: usize = 3;

/// Client for the WordPress.com REST API.
///
/// The access token and the authenticator strategy are instance-scoped:
/// each client owns its own session state. The token is only ever replaced
/// wholesale, so concurrent calls observe either the old value or the new
/// one, never a partial update.
pub struct WpcomClient {
    http: reqwest::Client,
    base_url: String,
    access_token: RwLock<Option<String>>,
    authenticator: Option<Arc<dyn Authenticator>>,
}

impl WpcomClient {
    /// Start building a client with non-default configuration.
    #[must_use]
    pub fn builder() -> WpcomClientBuilder {
        WpcomClientBuilder::default()
    }

    /// Create an unauthenticated client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the HTTP transport cannot be built.
    pub fn new() -> Result<Self, RestError> {
        Self::builder().build()
    }

    /// Create a client that uses a pre-obtained access token.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the HTTP transport cannot be built.
    pub fn with_access_token(token: impl Into<String>) -> Result<Self, RestError> {
        Self::builder().access_token(token).build()
    }

    /// Create a client that authenticates on demand with the given strategy.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the HTTP transport cannot be built.
    pub fn with_authenticator(authenticator: Arc<dyn Authenticator>) -> Result<Self, RestError> {
        Self::builder().authenticator(authenticator).build()
    }

    /// Current access token, if one is held and non-empty.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        let guard = self.access_token.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone().filter(|t| !t.is_empty())
    }

    /// Replace the access token for this and all future calls.
    pub fn set_access_token(&self, token: impl Into<String>) {
        let mut guard = self.access_token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token.into());
    }

    /// Drop the current access token, returning the client to the
    /// unauthenticated state. The next dispatch re-enters the
    /// authentication branch if a strategy is configured.
    pub fn clear_access_token(&self) {
        let mut guard = self.access_token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Whether the client currently holds a usable access token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Make a GET request. Parameters become a percent-encoded query string.
    ///
    /// # Errors
    ///
    /// See [`RestError`] for the failure taxonomy.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, RestError> {
        self.dispatch(PendingRequest::get(path, params)).await
    }

    /// Make a POST request. Parameters are sent form-encoded in the body.
    ///
    /// # Errors
    ///
    /// See [`RestError`] for the failure taxonomy.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, RestError> {
        self.dispatch(PendingRequest::post(path, params)).await
    }

    /// Fetch the authenticated user's profile.
    ///
    /// <https://developer.wordpress.com/docs/api/1/get/me/>
    ///
    /// # Errors
    ///
    /// See [`RestError`] for the failure taxonomy.
    pub async fn me(&self) -> Result<Me, RestError> {
        self.get("me", &[]).await
    }

    /// Fetch notifications with default pagination and field selection.
    ///
    /// Defaults for `number`, `num_note_items`, and `fields` are injected
    /// before delegating to [`Self::get`]; a caller-supplied value for any
    /// of those keys wins, so the query never carries conflicting
    /// duplicates.
    ///
    /// <https://developer.wordpress.com/docs/api/1/get/notifications/>
    ///
    /// # Errors
    ///
    /// See [`RestError`] for the failure taxonomy.
    pub async fn notifications(&self, params: &[(&str, &str)]) -> Result<Notes, RestError> {
        let defaults =
            [("number", "40"), ("num_note_items", "20"), ("fields", NOTIFICATION_FIELDS)];

        let mut merged = params.to_vec();
        for (key, value) in defaults {
            if !params.iter().any(|(k, _)| *k == key) {
                merged.push((key, value));
            }
        }
        self.get("notifications", &merged).await
    }

    /// Post a reply to a comment on the given site.
    ///
    /// # Errors
    ///
    /// See [`RestError`] for the failure taxonomy.
    pub async fn reply_to_comment<T: DeserializeOwned>(
        &self,
        site: &str,
        comment_id: u64,
        content: &str,
    ) -> Result<T, RestError> {
        let path = format!("sites/{site}/comments/{comment_id}/replies/new");
        self.post(&path, &[("content", content)]).await
    }

    /// Dispatch one call through the deferred-authentication pipeline.
    ///
    /// Authenticated (or no strategy configured): the request executes
    /// immediately. Unauthenticated with a strategy: one authentication
    /// round-trip runs first, and only an exact 200 lets the original
    /// request execute — exactly once. A rejected or failed authentication
    /// short-circuits with the corresponding [`RestError`]; nothing is
    /// queued for later retry and the caller gets exactly one completion.
    ///
    /// # Errors
    ///
    /// See [`RestError`] for the failure taxonomy.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        request: PendingRequest,
    ) -> Result<T, RestError> {
        let authenticator = match &self.authenticator {
            Some(authenticator) if !self.is_authenticated() => Arc::clone(authenticator),
            _ => return self.execute(request).await,
        };

        match authenticator.authenticate().await {
            Ok(token) => {
                info!("authentication completed");
                self.set_access_token(token.access_token);
                self.execute(request).await
            }
            Err(AuthError::Transport(err)) => {
                warn!(error = %err, "authentication failed in transit");
                Err(RestError::Transport(err))
            }
            Err(AuthError::Rejected { status, body }) => {
                warn!(%status, "authentication rejected");
                Err(RestError::AuthRejected { status, body })
            }
            Err(AuthError::Decode(err)) => Err(RestError::Decode(err)),
        }
    }

    /// Execute a request against the transport, decorated with the current
    /// bearer token.
    async fn execute<T: DeserializeOwned>(&self, request: PendingRequest) -> Result<T, RestError> {
        let is_post = *request.method() == Method::POST;
        let query_params: &[(String, String)] = if is_post { &[] } else { request.params() };
        let url = resource_url(&self.base_url, request.path(), query_params);

        let mut headers = HeaderMap::new();
        BearerAuth::new(self.access_token()).apply(&mut headers);

        debug!(method = %request.method(), %url, "dispatching request");

        let mut builder = self.http.request(request.method().clone(), &url).headers(headers);
        if is_post {
            builder = builder.form(request.params());
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %url, "request failed");
            return Err(RestError::Upstream { status, body });
        }

        response.json::<T>().await.map_err(RestError::Decode)
    }
}

/// Builder for [`WpcomClient`].
pub struct WpcomClientBuilder {
    base_url: String,
    timeout: Duration,
    max_redirects: usize,
    user_agent: String,
    access_token: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
}

impl Default for WpcomClientBuilder {
    fn default() -> Self {
        Self {
            base_url: REST_API_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: concat!("wpcom-rest/", env!("CARGO_PKG_VERSION")).to_string(),
            access_token: None,
            authenticator: None,
        }
    }
}

impl WpcomClientBuilder {
    /// Override the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the maximum number of redirects to follow.
    #[must_use]
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Override the User-Agent header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Supply a pre-obtained access token.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Supply an authentication strategy for on-demand token acquisition.
    #[must_use]
    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the HTTP transport cannot be built.
    pub fn build(self) -> Result<WpcomClient, RestError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects))
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| RestError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(WpcomClient {
            http,
            base_url: self.base_url,
            access_token: RwLock::new(self.access_token),
            authenticator: self.authenticator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_is_unauthenticated() {
        let client = WpcomClient::new().unwrap();

        assert!(!client.is_authenticated());
        assert!(client.access_token().is_none());
    }

    #[test]
    fn test_token_assignment_is_full_replacement() {
        let client = WpcomClient::with_access_token("first").unwrap();
        assert!(client.is_authenticated());

        client.set_access_token("second");
        assert_eq!(client.access_token().as_deref(), Some("second"));

        client.clear_access_token();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let client = WpcomClient::with_access_token("").unwrap();

        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_builder_defaults() {
        let builder = WpcomClientBuilder::default();

        assert_eq!(builder.base_url, REST_API_ENDPOINT);
        assert_eq!(builder.timeout, Duration::from_secs(30));
        assert_eq!(builder.max_redirects, 3);
        assert!(builder.user_agent.starts_with("wpcom-rest/"));
    }
}
