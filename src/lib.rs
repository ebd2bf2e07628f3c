//! WordPress.com REST API v1 client with OAuth2 authentication.
//!
//! The centerpiece is the deferred-authentication dispatch pipeline: every
//! API call checks whether the client already holds an access token, and if
//! not, runs the configured [`Authenticator`] strategy once before replaying
//! the original request. Callers stay oblivious to authentication state.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐
//! │  WpcomClient  │  Facade (get/post + convenience endpoints)
//! └───────┬───────┘
//!         │ dispatch(PendingRequest)
//!         │
//!         ├──► Authenticator       (one token round-trip when needed)
//!         ├──► BearerAuth          (idempotent Authorization header)
//!         └──► reqwest transport   (timeouts, redirects, JSON decoding)
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use wpcom_rest::{AppCredentials, PasswordAuthenticator, WpcomClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = AppCredentials::new(
//!         "your_client_id",
//!         "your_client_secret",
//!         "https://your-app.example/callback",
//!     );
//!     let authenticator =
//!         Arc::new(PasswordAuthenticator::new(credentials, "alice", "hunter2")?);
//!
//!     let client = WpcomClient::builder().authenticator(authenticator).build()?;
//!
//!     // First call triggers authentication, then replays the request.
//!     let me = client.me().await?;
//!     println!("logged in as {:?}", me.username);
//!
//!     let notes = client.notifications(&[]).await?;
//!     println!("{} notifications", notes.notes.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod request;

pub use auth::{
    AppCredentials, AuthError, Authenticator, BearerAuth, CodeAuthenticator,
    PasswordAuthenticator, Token,
};
pub use client::{WpcomClient, WpcomClientBuilder, REST_API_ENDPOINT};
pub use error::RestError;
pub use models::{Me, Note, Notes};
pub use request::PendingRequest;
