//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_backend, use_backend};

pub mod views;

mod auth;
pub use auth::{use_auth, use_identity, AuthProvider, LoginButton, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod spinner;
pub use spinner::Spinner;

mod tab_bar;
pub use tab_bar::TabBar;

mod users;
pub use users::{UserForm, UserTable};

mod tasks;
pub use tasks::{TaskForm, TaskTable};
