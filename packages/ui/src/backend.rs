//! Shared record-backend constructor and context hook.
//!
//! The backend is provided once at the app root as a `Signal<HttpBackend>` so
//! event handlers can copy the handle and clone the client out of it.

use api::HttpBackend;
use dioxus::prelude::*;
use store::AppConfig;

/// Create the HTTP backend for the configured record API.
pub fn make_backend(config: &AppConfig) -> HttpBackend {
    HttpBackend::new(config.api.base_url.as_str())
}

/// Consume the `Signal<HttpBackend>` from context.
pub fn use_backend() -> Signal<HttpBackend> {
    use_context::<Signal<HttpBackend>>()
}
