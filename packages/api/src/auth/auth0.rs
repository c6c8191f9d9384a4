//! # Authorization Code + PKCE flow for a browser app
//!
//! [`Auth0Client`] is a public client: it has no secret, so the PKCE verifier is
//! what binds the callback to the login that started it.
//!
//! ## Flow
//!
//! 1. **[`login`](Auth0Client::login)**: builds the `/authorize` URL requesting
//!    `openid`, `profile` and `email`, stores the CSRF state and PKCE verifier as a
//!    [`PendingLogin`], and navigates away.
//! 2. The tenant redirects to the app origin with `?code=&state=`.
//! 3. **[`restore`](Auth0Client::restore)**: on load, spots the callback, checks the
//!    state against the pending login, exchanges the code at `/oauth/token`, reads
//!    `/userinfo`, and stores a [`StoredSession`]. Without a callback it returns the
//!    stored session, if any.
//! 4. **[`logout`](Auth0Client::logout)**: forgets the session and goes through
//!    `/v2/logout?client_id=..&returnTo={origin}`.

use oauth2::basic::BasicClient;
use oauth2::url::Url;
use oauth2::{
    AuthType, AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use store::config::AuthConfig;
use store::SessionUser;

use super::config::OAuthConfig;
use super::session::{self, PendingLogin, StoredSession, PENDING_LOGIN_KEY, SESSION_KEY};
use super::{browser, AuthError};

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Query parameters the tenant appends when redirecting back.
#[derive(Debug, Clone, PartialEq)]
pub enum Callback {
    Authorized { code: String, state: String },
    Denied { error: String, description: Option<String> },
}

impl Callback {
    /// Read a callback from a page URL; `None` for an ordinary page load.
    pub fn from_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let mut code = None;
        let mut state = None;
        let mut error = None;
        let mut description = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "code" => code = Some(value.into_owned()),
                "state" => state = Some(value.into_owned()),
                "error" => error = Some(value.into_owned()),
                "error_description" => description = Some(value.into_owned()),
                _ => {}
            }
        }
        if let Some(error) = error {
            return Some(Callback::Denied { error, description });
        }
        Some(Callback::Authorized {
            code: code?,
            state: state?,
        })
    }
}

/// Session capabilities handed to the UI: restore, login, logout.
#[derive(Debug, Clone, PartialEq)]
pub struct Auth0Client {
    config: OAuthConfig,
}

impl Auth0Client {
    /// Create a client for the configured tenant, returning users to `origin`.
    pub fn new(auth: &AuthConfig, origin: &str) -> Result<Self, AuthError> {
        Ok(Self::from_config(OAuthConfig::from_auth(auth, origin)?))
    }

    pub fn from_config(config: OAuthConfig) -> Self {
        Self { config }
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
            .set_auth_type(AuthType::RequestBody)
    }

    /// Build the authorization URL and the handshake to keep until the callback.
    pub fn authorize_url(&self) -> (String, PendingLogin) {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let client = self.create_client();
        let mut request = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .set_pkce_challenge(pkce_challenge);
        if let Some(audience) = &self.config.audience {
            request = request.add_extra_param("audience", audience.clone());
        }
        let (auth_url, csrf_state) = request.url();

        let pending = PendingLogin {
            state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        };
        (auth_url.to_string(), pending)
    }

    /// Send the browser to the tenant's login page.
    pub fn login(&self) -> Result<(), AuthError> {
        let (url, pending) = self.authorize_url();
        session::save(PENDING_LOGIN_KEY, &pending)?;
        browser::redirect(&url);
        Ok(())
    }

    /// Tenant logout URL that returns to the app origin.
    pub fn logout_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("returnTo", self.config.redirect_url.as_str()),
        ];
        match Url::parse_with_params(&self.config.logout_url, &params) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::error!("Invalid logout URL: {e}");
                self.config.redirect_url.as_str().to_string()
            }
        }
    }

    /// Forget the session and sign out at the tenant.
    pub fn logout(&self) {
        session::remove(SESSION_KEY);
        browser::redirect(&self.logout_url());
    }

    /// Resolve the session for the current page load.
    pub async fn restore(&self) -> Result<Option<SessionUser>, AuthError> {
        self.restore_from(browser::current_url().as_deref()).await
    }

    /// Resolve the session given the page URL.
    pub async fn restore_from(&self, url: Option<&str>) -> Result<Option<SessionUser>, AuthError> {
        match url.and_then(Callback::from_url) {
            Some(Callback::Authorized { code, state }) => {
                let user = self.complete_login(&code, &state).await;
                browser::clear_query();
                user.map(Some)
            }
            Some(Callback::Denied { error, description }) => {
                session::remove(PENDING_LOGIN_KEY);
                browser::clear_query();
                tracing::warn!(
                    "Login was not completed: {error} {}",
                    description.unwrap_or_default()
                );
                Ok(None)
            }
            None => Ok(session::load::<StoredSession>(SESSION_KEY).map(|s| s.user)),
        }
    }

    /// Exchange an authorization code for a session.
    pub async fn complete_login(&self, code: &str, state: &str) -> Result<SessionUser, AuthError> {
        let pending: PendingLogin =
            session::take(PENDING_LOGIN_KEY).ok_or(AuthError::NoPendingLogin)?;
        if pending.state != state {
            return Err(AuthError::StateMismatch);
        }

        let http_client = http_client()?;
        let client = self.create_client();
        let token_result = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pending.pkce_verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let access_token = token_result.access_token().secret().clone();

        let user: SessionUser = http_client
            .get(&self.config.userinfo_url)
            .bearer_auth(&access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!("Signed in as {}", user.display_name());
        session::save(SESSION_KEY, &StoredSession { user: user.clone() })?;
        Ok(user)
    }
}

fn http_client() -> Result<reqwest::Client, AuthError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::TokenExchange(e.to_string()))
    }
    #[cfg(target_arch = "wasm32")]
    {
        Ok(reqwest::Client::new())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Form, Json, Router};
    use oauth2::{AuthUrl, ClientId, RedirectUrl, TokenUrl};
    use serde_json::json;

    use super::*;

    fn client(audience: Option<&str>) -> Auth0Client {
        Auth0Client::new(
            &AuthConfig {
                domain: "tenant.auth0.com".to_string(),
                client_id: "abc123".to_string(),
                audience: audience.map(str::to_string),
            },
            "http://localhost:8080",
        )
        .unwrap()
    }

    fn query(url: &str) -> HashMap<String, String> {
        Url::parse(url).unwrap().query_pairs().into_owned().collect()
    }

    #[test]
    fn test_authorize_url_carries_pkce_and_state() {
        let (url, pending) = client(None).authorize_url();
        assert!(url.starts_with("https://tenant.auth0.com/authorize?"));

        let params = query(&url);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "abc123");
        assert_eq!(params["redirect_uri"], "http://localhost:8080");
        assert_eq!(params["scope"], "openid profile email");
        assert_eq!(params["code_challenge_method"], "S256");
        assert!(!params["code_challenge"].is_empty());
        assert_eq!(params["state"], pending.state);
        assert!(!params.contains_key("audience"));
        assert!(!pending.pkce_verifier.is_empty());
    }

    #[test]
    fn test_authorize_url_with_audience() {
        let (url, _) = client(Some("https://api.example.com")).authorize_url();
        assert_eq!(query(&url)["audience"], "https://api.example.com");
    }

    #[test]
    fn test_each_login_gets_fresh_state() {
        let c = client(None);
        let (_, first) = c.authorize_url();
        let (_, second) = c.authorize_url();
        assert_ne!(first.state, second.state);
        assert_ne!(first.pkce_verifier, second.pkce_verifier);
    }

    #[test]
    fn test_logout_url_returns_to_origin() {
        let url = client(None).logout_url();
        assert!(url.starts_with("https://tenant.auth0.com/v2/logout?"));
        let params = query(&url);
        assert_eq!(params["client_id"], "abc123");
        assert_eq!(params["returnTo"], "http://localhost:8080");
    }

    #[test]
    fn test_callback_parsing() {
        assert_eq!(Callback::from_url("http://localhost:8080/"), None);
        assert_eq!(Callback::from_url("http://localhost:8080/?code=c1"), None);
        assert_eq!(
            Callback::from_url("http://localhost:8080/?code=c1&state=s1"),
            Some(Callback::Authorized {
                code: "c1".to_string(),
                state: "s1".to_string(),
            })
        );
        assert_eq!(
            Callback::from_url("http://localhost:8080/?error=access_denied&state=s1"),
            Some(Callback::Denied {
                error: "access_denied".to_string(),
                description: None,
            })
        );
    }

    #[tokio::test]
    async fn test_callback_without_pending_login() {
        session::remove(PENDING_LOGIN_KEY);
        let err = client(None).complete_login("c1", "s1").await.unwrap_err();
        assert!(matches!(err, AuthError::NoPendingLogin));
    }

    #[tokio::test]
    async fn test_callback_with_wrong_state() {
        let c = client(None);
        let (_, pending) = c.authorize_url();
        session::save(PENDING_LOGIN_KEY, &pending).unwrap();

        let err = c.complete_login("c1", "forged").await.unwrap_err();
        assert!(matches!(err, AuthError::StateMismatch));
        // The handshake is single-use.
        assert_eq!(session::load::<PendingLogin>(PENDING_LOGIN_KEY), None);
    }

    #[tokio::test]
    async fn test_restore_returns_stored_session() {
        session::save(
            SESSION_KEY,
            &StoredSession {
                user: SessionUser {
                    name: Some("Ann".to_string()),
                    email: None,
                },
            },
        )
        .unwrap();

        let user = client(None).restore_from(None).await.unwrap();
        assert_eq!(user.map(|u| u.display_name().to_string()), Some("Ann".to_string()));

        session::remove(SESSION_KEY);
        assert_eq!(client(None).restore_from(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_denied_callback_is_anonymous() {
        let url = "http://localhost:8080/?error=access_denied&error_description=nope";
        assert_eq!(client(None).restore_from(Some(url)).await.unwrap(), None);
    }

    /// Serve a fake tenant with `/oauth/token` and `/userinfo`.
    async fn fake_tenant() -> String {
        let app = Router::new()
            .route(
                "/oauth/token",
                post(|Form(form): Form<HashMap<String, String>>| async move {
                    let ok = form.get("grant_type").map(String::as_str) == Some("authorization_code")
                        && form.get("code").map(String::as_str) == Some("c1")
                        && form.get("client_id").map(String::as_str) == Some("abc123")
                        && form.contains_key("code_verifier");
                    if !ok {
                        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid_grant" })));
                    }
                    (
                        StatusCode::OK,
                        Json(json!({ "access_token": "tok", "token_type": "Bearer", "expires_in": 86400 })),
                    )
                }),
            )
            .route(
                "/userinfo",
                get(|headers: HeaderMap| async move {
                    let bearer = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    if bearer != "Bearer tok" {
                        return (StatusCode::UNAUTHORIZED, Json(json!({})));
                    }
                    (
                        StatusCode::OK,
                        Json(json!({ "sub": "auth0|1", "name": "Ann", "email": "ann@x.com" })),
                    )
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_full_callback_exchange() {
        let base = fake_tenant().await;
        let c = Auth0Client::from_config(OAuthConfig {
            client_id: ClientId::new("abc123".to_string()),
            auth_url: AuthUrl::new(format!("{base}/authorize")).unwrap(),
            token_url: TokenUrl::new(format!("{base}/oauth/token")).unwrap(),
            redirect_url: RedirectUrl::new("http://localhost:8080".to_string()).unwrap(),
            userinfo_url: format!("{base}/userinfo"),
            logout_url: format!("{base}/v2/logout"),
            audience: None,
        });
        let (_, pending) = c.authorize_url();
        session::save(PENDING_LOGIN_KEY, &pending).unwrap();

        let callback = format!("http://localhost:8080/?code=c1&state={}", pending.state);
        let user = c.restore_from(Some(&callback)).await.unwrap().unwrap();

        assert_eq!(user.display_name(), "Ann");
        assert_eq!(user.email.as_deref(), Some("ann@x.com"));
        let stored: StoredSession = session::load(SESSION_KEY).unwrap();
        assert_eq!(stored.user, user);
        // The token is only used for /userinfo and never persisted.
        let raw = serde_json::to_string(&stored).unwrap();
        assert!(!raw.contains("tok"));
        assert_eq!(c.restore_from(None).await.unwrap(), Some(user));
    }
}
