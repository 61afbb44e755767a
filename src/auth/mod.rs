//! Authentication module
//!
//! The inventory API only accepts HTTP Basic authentication. The
//! `Authenticator` holds the credentials for the lifetime of the client and
//! stamps them onto every outgoing request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
