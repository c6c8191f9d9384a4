//! Session status as seen by the app, and the gate that decides what to render.

use serde::{Deserialize, Serialize};

/// The signed-in identity. Only the display name is shown by the app.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SessionUser {
    /// Name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionStatus {
    /// The identity provider has not answered yet.
    #[default]
    Loading,
    Anonymous,
    Authenticated(SessionUser),
}

/// What the top-level view shows for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Spinner,
    Login,
    Manage,
}

impl SessionStatus {
    pub fn view(&self) -> GateView {
        match self {
            SessionStatus::Loading => GateView::Spinner,
            SessionStatus::Anonymous => GateView::Login,
            SessionStatus::Authenticated(_) => GateView::Manage,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Tracks authentication transitions so the initial fetches run once per login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    /// Feed the latest status; returns `true` when the session has just become
    /// authenticated and both directories should be fetched.
    pub fn observe(&mut self, status: &SessionStatus) -> bool {
        let now = matches!(status, SessionStatus::Authenticated(_));
        let entered = now && !self.authenticated;
        self.authenticated = now;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(name: &str) -> SessionStatus {
        SessionStatus::Authenticated(SessionUser {
            name: Some(name.to_string()),
            email: None,
        })
    }

    #[test]
    fn test_view_per_status() {
        assert_eq!(SessionStatus::Loading.view(), GateView::Spinner);
        assert_eq!(SessionStatus::Anonymous.view(), GateView::Login);
        assert_eq!(signed_in("Ann").view(), GateView::Manage);
    }

    #[test]
    fn test_fetch_once_per_authentication() {
        let mut gate = SessionGate::default();

        assert!(!gate.observe(&SessionStatus::Loading));
        assert!(gate.observe(&signed_in("Ann")));
        // Re-renders with the same session do not fetch again.
        assert!(!gate.observe(&signed_in("Ann")));
        assert!(!gate.observe(&signed_in("Ann")));

        assert!(!gate.observe(&SessionStatus::Anonymous));
        assert!(gate.observe(&signed_in("Ann")));
    }

    #[test]
    fn test_anonymous_never_fetches() {
        let mut gate = SessionGate::default();
        assert!(!gate.observe(&SessionStatus::Loading));
        assert!(!gate.observe(&SessionStatus::Anonymous));
        assert!(!gate.observe(&SessionStatus::Anonymous));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = SessionUser {
            name: None,
            email: Some("ann@x.com".to_string()),
        };
        assert_eq!(user.display_name(), "ann@x.com");
        assert_eq!(
            SessionUser {
                name: None,
                email: None
            }
            .display_name(),
            ""
        );
    }
}
