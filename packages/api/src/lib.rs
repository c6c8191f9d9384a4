//! # API crate: remote services the TaskDesk frontend talks to
//!
//! TaskDesk owns no server. This crate wraps the two it depends on:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`HttpBackend`], the reqwest implementation of [`store::RecordBackend`] for `/api/user` and `/api/task` |
//! | [`auth`] | [`auth::Auth0Client`], redirect-based sign-in (Authorization Code + PKCE) against a hosted identity provider, plus session persistence |
//!
//! Both compile for WASM (fetch-backed reqwest, `sessionStorage`) and natively,
//! where tests run them against local axum servers.

pub mod auth;
pub mod http;

pub use auth::{Auth0Client, AuthError};
pub use http::HttpBackend;
