//! Browser-side persistence of the login handshake and the signed-in session.
//!
//! On WASM both values live in `window.sessionStorage`, so a session ends with the
//! tab. Native builds keep them in a per-thread map.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::SessionUser;

use super::AuthError;

/// Key holding the [`PendingLogin`] between the redirect and the callback.
pub const PENDING_LOGIN_KEY: &str = "taskdesk.pending_login";

/// Key holding the [`StoredSession`].
pub const SESSION_KEY: &str = "taskdesk.session";

/// CSRF state and PKCE verifier of a login in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingLogin {
    pub state: String,
    pub pkce_verifier: String,
}

/// A completed login. Only the profile is kept; record requests go out
/// without a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: SessionUser,
}

pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = backing::get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("discarding unreadable {key}: {e}");
            backing::remove(key);
            None
        }
    }
}

pub fn save<T: Serialize>(key: &str, value: &T) -> Result<(), AuthError> {
    let raw = serde_json::to_string(value).map_err(|e| AuthError::Storage(e.to_string()))?;
    backing::set(key, &raw)
}

pub fn remove(key: &str) {
    backing::remove(key);
}

/// Load and delete in one step.
pub fn take<T: DeserializeOwned>(key: &str) -> Option<T> {
    let value = load(key);
    remove(key);
    value
}

#[cfg(target_arch = "wasm32")]
mod backing {
    use super::AuthError;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }

    pub fn get(key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) -> Result<(), AuthError> {
        storage()
            .ok_or_else(|| AuthError::Storage("sessionStorage unavailable".to_string()))?
            .set_item(key, value)
            .map_err(|e| AuthError::Storage(format!("{e:?}")))
    }

    pub fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::AuthError;

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        ITEMS.with(|items| items.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) -> Result<(), AuthError> {
        ITEMS.with(|items| {
            items.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove(key: &str) {
        ITEMS.with(|items| {
            items.borrow_mut().remove(key);
        });
    }
}
