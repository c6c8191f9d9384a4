use dioxus::prelude::*;

/// Full-page loading indicator shown while the session is being resolved.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-page",
            div {
                class: "spinner",
                role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
        }
    }
}
