//! Credential schemes the client can send

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where an API key travels on the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Sent as a request header
    #[default]
    Header,
    /// Sent as a query parameter
    Query,
}

/// Credentials attached to every request
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// Send requests unauthenticated
    #[default]
    None,

    /// `Authorization: Bearer <token>`, the scheme the API expects
    Bearer {
        /// The bearer token
        token: String,
    },

    /// A named key, for gateways that front the API
    ApiKey {
        /// Header or query placement
        #[serde(default)]
        location: Location,
        /// Header name or query parameter name
        name: String,
        /// Prefix to add before the value (e.g., "Token ")
        #[serde(default)]
        prefix: Option<String>,
        /// The API key value
        value: String,
    },

    /// HTTP Basic, for proxies that require it
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Custom headers
    CustomHeaders {
        /// Header name to value
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Create bearer auth from a token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Check if any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Scheme name, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bearer { .. } => "bearer",
            Self::ApiKey { .. } => "api_key",
            Self::Basic { .. } => "basic",
            Self::CustomHeaders { .. } => "custom_headers",
        }
    }
}

// Credentials never appear in debug output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
            Self::ApiKey {
                location,
                name,
                prefix,
                ..
            } => f
                .debug_struct("ApiKey")
                .field("location", location)
                .field("name", name)
                .field("prefix", prefix)
                .field("value", &"<redacted>")
                .finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::CustomHeaders { headers } => {
                let mut names: Vec<&str> = headers.keys().map(String::as_str).collect();
                names.sort_unstable();
                f.debug_struct("CustomHeaders")
                    .field("headers", &names)
                    .finish_non_exhaustive()
            }
        }
    }
}
