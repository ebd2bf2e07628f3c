//! Application credentials and OAuth2 grant construction.
//!
//! Grant builders are pure: they produce the form parameter set for a POST
//! to the token endpoint and never touch the network. Input validation is
//! the caller's responsibility.

/// WordPress.com OAuth2 authorization (consent) endpoint.
pub const AUTHORIZE_ENDPOINT: &str = "https://public-api.wordpress.com/oauth2/authorize";

/// WordPress.com OAuth2 token endpoint.
pub const TOKEN_ENDPOINT: &str = "https://public-api.wordpress.com/oauth2/token";

const PASSWORD_GRANT_TYPE: &str = "password";
const BEARER_GRANT_TYPE: &str = "bearer";

/// Form parameters for one token request. Always sent as a POST.
pub type GrantParams = Vec<(&'static str, String)>;

/// Application credentials registered with WordPress.com.
#[derive(Debug, Clone)]
pub struct AppCredentials {
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Redirect URI registered for the application.
    pub redirect_uri: String,
}

impl AppCredentials {
    /// Create a new set of application credentials.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Browser consent URL for the authorization-code flow:
    /// `<authorize>?client_id=<id>&redirect_uri=<uri>&response_type=code`.
    #[must_use]
    pub fn authorization_url(&self) -> String {
        format!(
            "{AUTHORIZE_ENDPOINT}?client_id={}&redirect_uri={}&response_type=code",
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
        )
    }

    /// Form parameters for a password grant.
    #[must_use]
    pub fn password_grant(&self, username: &str, password: &str) -> GrantParams {
        vec![
            ("client_id", self.client_id.clone()),
            ("redirect_uri", self.redirect_uri.clone()),
            ("username", username.to_string()),
            ("password", password.to_string()),
            ("grant_type", PASSWORD_GRANT_TYPE.to_string()),
        ]
    }

    /// Form parameters for a bearer (authorization-code) grant.
    #[must_use]
    pub fn bearer_grant(&self, code: &str) -> GrantParams {
        vec![
            ("client_id", self.client_id.clone()),
            ("redirect_uri", self.redirect_uri.clone()),
            ("code", code.to_string()),
            ("grant_type", BEARER_GRANT_TYPE.to_string()),
        ]
    }
}
