//! HTTP access to the remote people catalog
//!
//! The client compiles for both the browser (`wasm32`) and native targets;
//! native builds use rustls and are what the integration tests exercise.

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{CatalogClient, CatalogClientBuilder, error::ClientError};
