//! Identity-provider endpoints derived from [`store::config::AuthConfig`].

use oauth2::{AuthUrl, ClientId, RedirectUrl, TokenUrl};
use store::config::AuthConfig;

use super::AuthError;

/// Validated tenant configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
    pub userinfo_url: String,
    pub logout_url: String,
    pub audience: Option<String>,
}

impl OAuthConfig {
    /// Build the tenant's endpoints. `origin` is where the provider sends the
    /// browser back after login and logout.
    pub fn from_auth(auth: &AuthConfig, origin: &str) -> Result<Self, AuthError> {
        let domain = auth
            .domain
            .trim()
            .trim_start_matches("https://")
            .trim_end_matches('/');
        if domain.is_empty() {
            return Err(AuthError::Config("auth.domain is not set".to_string()));
        }
        if auth.client_id.trim().is_empty() {
            return Err(AuthError::Config("auth.client_id is not set".to_string()));
        }
        let base = format!("https://{domain}");

        Ok(Self {
            client_id: ClientId::new(auth.client_id.trim().to_string()),
            auth_url: AuthUrl::new(format!("{base}/authorize"))
                .map_err(|e| AuthError::Config(e.to_string()))?,
            token_url: TokenUrl::new(format!("{base}/oauth/token"))
                .map_err(|e| AuthError::Config(e.to_string()))?,
            redirect_url: RedirectUrl::new(origin.to_string())
                .map_err(|e| AuthError::Config(e.to_string()))?,
            userinfo_url: format!("{base}/userinfo"),
            logout_url: format!("{base}/v2/logout"),
            audience: auth.audience.clone().filter(|a| !a.is_empty()),
        })
    }
}
