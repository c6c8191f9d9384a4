use api::auth::browser;
use api::Auth0Client;
use dioxus::prelude::*;
use store::AppConfig;
use ui::views::ManageView;
use ui::{make_backend, AuthProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Deployment settings, baked into the bundle.
const CONFIG: &str = include_str!("../taskdesk.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::from_toml_or_default(CONFIG));
    use_context_provider(|| Signal::new(make_backend(&config)));

    let identity = use_hook(|| match Auth0Client::new(&config.auth, &browser::origin()) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::error!("Sign-in is unavailable: {e}");
            None
        }
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            identity,
            ManageView {}
        }
    }
}
