//! Authentication context and hooks for the UI.

use api::Auth0Client;
use dioxus::prelude::*;
use store::SessionStatus;

/// Get the current session status.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionStatus> {
    use_context::<Signal<SessionStatus>>()
}

/// Get the identity provider injected into [`AuthProvider`], if one is configured.
pub fn use_identity() -> Option<Auth0Client> {
    use_context::<Option<Auth0Client>>()
}

/// Provider component that resolves the session once on mount.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(#[props(!optional)] identity: Option<Auth0Client>, children: Element) -> Element {
    let mut status = use_signal(SessionStatus::default);
    use_context_provider(|| status);
    let provided = identity.clone();
    use_context_provider(|| provided);

    // Finish a login redirect or pick up the stored session
    let _ = use_resource(move || {
        let identity = identity.clone();
        async move {
            let Some(client) = identity else {
                tracing::error!("Identity provider is not configured; staying signed out");
                status.set(SessionStatus::Anonymous);
                return;
            };
            match client.restore().await {
                Ok(Some(user)) => {
                    tracing::info!("Session restored for {}", user.display_name());
                    status.set(SessionStatus::Authenticated(user));
                }
                Ok(None) => status.set(SessionStatus::Anonymous),
                Err(e) => {
                    tracing::error!("Failed to restore session: {e}");
                    status.set(SessionStatus::Anonymous);
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button that sends the browser to the identity provider.
#[component]
pub fn LoginButton(
    #[props(default = "Log In".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let identity = use_identity();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        let Some(client) = identity.as_ref() else {
            tracing::error!("Cannot log in: identity provider is not configured");
            return;
        };
        loading.set(true);
        if let Err(e) = client.login() {
            tracing::error!("Failed to start login: {e}");
            loading.set(false);
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user and return to the app origin.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut status = use_auth();
    let identity = use_identity();

    let onclick = move |_| {
        status.set(SessionStatus::Anonymous);
        if let Some(client) = identity.as_ref() {
            client.logout();
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 14, height: 14 }
            span { class: "btn-label", "{label}" }
        }
    }
}
