//! OAuth2 authentication for the WordPress.com API.
//!
//! # Module organization
//!
//! - [`grant`]: application credentials and pure grant-request construction
//! - [`types`]: token-endpoint payload types
//! - [`authenticator`]: the [`Authenticator`] strategy trait plus the
//!   password-grant and authorization-code implementations
//! - [`header`]: idempotent `Authorization: Bearer` request decoration
//!
//! Strategies are pluggable: the dispatch pipeline only depends on the
//! [`Authenticator`] trait and never assumes a grant type.

pub mod authenticator;
pub mod grant;
pub mod header;
pub mod types;

pub use authenticator::{AuthError, Authenticator, CodeAuthenticator, PasswordAuthenticator};
pub use grant::{AppCredentials, AUTHORIZE_ENDPOINT, TOKEN_ENDPOINT};
pub use header::BearerAuth;
pub use types::Token;
