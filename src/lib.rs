//! # scc-inventory
//!
//! Command-line client for the SUSE Customer Center connect API. It
//! authenticates with HTTP Basic credentials from a YAML file, fetches one
//! resource collection (products, subscriptions, systems, installer
//! repositories, ...), follows the page count announced in the `Link`
//! header, and prints every page as it arrives.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scc_inventory::http::{HttpClient, HttpClientConfig};
//! use scc_inventory::output::{OutputFormat, Renderer};
//! use scc_inventory::pagination::PageDriver;
//! use scc_inventory::{ConfigFile, Result, RouteTable};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConfigFile::load("/etc/scc/credentials.yaml")?;
//!     let path = RouteTable::new().resolve("subscriptions")?;
//!
//!     let client = HttpClient::with_auth(HttpClientConfig::default(), config.credentials().into())?;
//!     let mut renderer = Renderer::new(std::io::stdout(), OutputFormat::Pretty);
//!     PageDriver::new(&client).run(&path, &mut renderer).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌────────────┐   ┌────────────┐
//! │  config  │──▶│  routes  │──▶│ pagination │──▶│   output   │
//! │ (YAML)   │   │ resource │   │ PageDriver │   │  Renderer  │
//! └──────────┘   │  → path  │   └─────┬──────┘   └────────────┘
//!                └──────────┘         │ Transport
//!                               ┌─────┴──────┐
//!                               │    http    │── auth (Basic)
//!                               │ HttpClient │
//!                               └────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Credential file and client defaults
pub mod config;

/// Authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Resource name to API path routing
pub mod routes;

/// Link header pagination
pub mod pagination;

/// Record rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ConfigFile, Credentials};
pub use error::{Error, Result};
pub use routes::RouteTable;
pub use types::{FetchSummary, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
