//! Token-endpoint payload types.

use serde::Deserialize;

/// Token response from the WordPress.com token endpoint.
///
/// A successful grant returns at least `access_token` and `token_type`;
/// the blog fields describe which blog the token was scoped to.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    /// Opaque bearer token for authenticated resource calls.
    pub access_token: String,

    /// Token type (always "bearer" for this API).
    pub token_type: String,

    /// URL of the blog the token was granted for.
    #[serde(default)]
    pub blog_url: Option<String>,

    /// Granted scope.
    #[serde(default)]
    pub scope: Option<String>,

    /// Identifier of the blog the token was granted for.
    #[serde(default)]
    pub blog_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_deserializes_full_payload() {
        let json = r#"{
            "access_token": "abc123",
            "token_type": "bearer",
            "blog_url": "https://example.wordpress.com",
            "scope": "",
            "blog_id": "1234"
        }"#;

        let token: Token = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.blog_url.as_deref(), Some("https://example.wordpress.com"));
        assert_eq!(token.blog_id.as_deref(), Some("1234"));
    }

    #[test]
    fn test_token_deserializes_minimal_payload() {
        let json = r#"{"access_token": "abc123", "token_type": "bearer"}"#;

        let token: Token = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "abc123");
        assert!(token.blog_url.is_none());
        assert!(token.scope.is_none());
        assert!(token.blog_id.is_none());
    }
}
