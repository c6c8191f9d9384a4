use dioxus::prelude::*;

use crate::auth::LoginButton;

/// Landing card for visitors without a session.
#[component]
pub fn LoginView() -> Element {
    rsx! {
        div {
            class: "login-page",
            div {
                class: "card login-card",
                div {
                    class: "card-body",
                    h1 { class: "login-title", "TaskDesk" }
                    p { class: "login-subtitle", "Sign in to manage users and tasks." }
                    LoginButton { class: "btn btn-primary btn-block" }
                }
            }
        }
    }
}
