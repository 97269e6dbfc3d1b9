//! Authentication module
//!
//! Supports: Bearer token, API Key, Basic, Custom Headers
//!
//! The API authenticates with a bearer token; the other schemes cover
//! proxies and self-hosted deployments that front it differently.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Location};
