//! # Application configuration: `taskdesk.toml`
//!
//! The web package embeds `taskdesk.toml` at build time and parses it with
//! [`AppConfig::from_toml`]. The file tells the client where the record API
//! lives and which identity-provider tenant to sign in against.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"   # no trailing slash needed
//!
//! [auth]
//! domain = "example.us.auth0.com"
//! client_id = "abc123"
//! audience = "https://api.example.com" # optional
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Record API section. `base_url` defaults to **`http://localhost:3001`**. |
//! | [`AuthConfig`] | Identity-provider section: tenant `domain`, public `client_id`, optional `audience`. |
//!
//! Every struct derives `Default`, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `taskdesk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Record API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin serving `/api/user` and `/api/task`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Identity-provider configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Tenant host, without scheme: `"example.us.auth0.com"`.
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub audience: Option<String>,
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskdesk.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::error!("invalid {}: {e}", Self::filename());
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
