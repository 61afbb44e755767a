//! Auth configuration types

use crate::config::Credentials;

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password, sent even when empty
        password: String,
    },
}

impl AuthConfig {
    /// Basic auth from a username and password
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<Credentials> for AuthConfig {
    fn from(creds: Credentials) -> Self {
        Self::Basic {
            username: creds.username,
            password: creds.password,
        }
    }
}
