//! Sign-in against a hosted OpenID Connect tenant (Auth0-compatible).
//!
//! The app never handles credentials. [`Auth0Client::login`] sends the browser to
//! the tenant's `/authorize` page, the tenant redirects back to the app origin with
//! `?code=&state=`, and [`Auth0Client::restore`] finishes the handshake on the next
//! page load. Logout clears the stored session and bounces through the tenant's
//! `/v2/logout` back to the origin.

mod auth0;
pub mod browser;
mod config;
pub mod session;

pub use auth0::{Auth0Client, Callback};
pub use config::OAuthConfig;
pub use session::{PendingLogin, StoredSession};

/// Why signing in or restoring a session failed.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("identity provider is not configured: {0}")]
    Config(String),
    #[error("no login in progress")]
    NoPendingLogin,
    #[error("login state does not match the one issued")]
    StateMismatch,
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("could not load user profile: {0}")]
    UserInfo(#[from] reqwest::Error),
    #[error("session storage: {0}")]
    Storage(String),
}
