//! Credential file loading and client defaults
//!
//! The credential file is a small YAML document:
//!
//! ```yaml
//! user_name: SCC_0123456789
//! password: s3cr3t
//! routes:            # optional, extends the built-in routing table
//!   systems: /organizations/systems
//! ```
//!
//! Missing keys decode to empty strings; the client then authenticates with
//! whatever was present.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

// ============================================================================
// Client Defaults
// ============================================================================

/// Base URL of the SUSE Customer Center connect API
pub const DEFAULT_BASE_URL: &str = "https://scc.suse.com/connect";

/// Media type the API requires on every request
pub const SCC_ACCEPT: &str = "application/vnd.scc.suse.com.v4+json";

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ============================================================================
// Credentials
// ============================================================================

/// Username and password for HTTP Basic authentication
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Organization or user login
    pub username: String,
    /// Password for the login
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// ============================================================================
// Config File
// ============================================================================

/// Complete credential file contents
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub password: String,

    /// Extra resource routes, name to path template
    #[serde(default)]
    pub routes: HashMap<String, String>,
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("user_name", &self.user_name)
            .field("password", &"***")
            .field("routes", &self.routes)
            .finish()
    }
}

impl ConfigFile {
    /// Credentials carried by this file
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.user_name, &self.password)
    }

    /// Parse a config document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a document with no keys, not an error
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ConfigFile = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a config document from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            username = %config.user_name,
            routes = config.routes.len(),
            "Loaded credential file"
        );
        Ok(config)
    }
}
