//! HTTP client module
//!
//! Provides the authenticated client for the inventory API and the
//! [`Transport`] seam the pagination driver fetches through.
//!
//! # Features
//!
//! - **Fixed timeout**: every request is bounded by the configured timeout
//! - **Default headers**: the API media type is sent on every request
//! - **Authentication**: integration with the auth module
//! - **Typed failures**: transport, status and decode errors stay distinct

mod client;
mod types;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use types::{Page, Transport};

#[cfg(test)]
mod tests;
