//! Shared frontend plumbing: auth context, browser storage, config and
//! common components

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod storage;

pub use auth::{AuthContext, AuthProvider, use_auth, use_current_user};
pub use client::catalog_client;
pub use components::{ErrorPanel, Spinner};
pub use storage::BrowserStorage;
