//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use super::types::{AuthConfig, Location};
use reqwest::RequestBuilder;

/// Authenticator applies authentication to HTTP requests
#[derive(Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The auth configuration in use
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,

            AuthConfig::Bearer { token } => req.bearer_auth(token),

            AuthConfig::ApiKey {
                location,
                name,
                prefix,
                value,
            } => {
                let val = format!("{}{}", prefix.as_deref().unwrap_or(""), value);
                match location {
                    Location::Header => req.header(name.as_str(), val),
                    Location::Query => req.query(&[(name.as_str(), val)]),
                }
            }

            AuthConfig::Basic { username, password } => req.basic_auth(username, Some(password)),

            AuthConfig::CustomHeaders { headers } => {
                let mut req = req;
                for (key, value) in headers {
                    req = req.header(key.as_str(), value.as_str());
                }
                req
            }
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("kind", &self.config.kind())
            .finish_non_exhaustive()
    }
}
