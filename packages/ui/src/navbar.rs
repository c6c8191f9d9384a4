use dioxus::prelude::*;

use crate::auth::LogoutButton;
use crate::Icon;
use crate::icons::FaCircleUser;

/// Card header with the app title, the signed-in user and a logout button.
#[component]
pub fn Navbar(user_name: String) -> Element {
    rsx! {
        div {
            class: "navbar",
            h1 { class: "navbar-title", "User and Task Management" }
            div {
                class: "navbar-user",
                span {
                    class: "navbar-name",
                    Icon { icon: FaCircleUser, width: 16, height: 16 }
                    " {user_name}"
                }
                LogoutButton { class: "btn btn-outline-light btn-sm" }
            }
        }
    }
}
