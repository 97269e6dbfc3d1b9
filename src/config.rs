//! Client configuration
//!
//! Settings needed to reach the API: host, credentials, timeouts and
//! default headers. Loadable from the environment or a YAML file.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default API host
pub const DEFAULT_HOST: &str = "https://api.zoo.dev";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "ZOO_API_TOKEN";

/// Legacy environment variable for the API token
pub const LEGACY_TOKEN_ENV: &str = "KITTYCAD_API_TOKEN";

/// Environment variable overriding the API host
pub const HOST_ENV: &str = "ZOO_HOST";

/// Configuration for [`Client`](crate::Client)
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API
    #[serde(default = "default_host")]
    pub host: String,

    /// Bearer token
    #[serde(default)]
    pub token: Option<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// Explicit credential scheme, taking precedence over `token`
    #[serde(default)]
    pub auth: Option<AuthConfig>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("zoo-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field("auth", &self.auth)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: None,
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            headers: StringMap::new(),
            auth: None,
        }
    }
}

impl ClientConfig {
    /// Create a config for the default host with the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self::default().with_token(token)
    }

    /// Build a config from the environment.
    ///
    /// Reads `ZOO_API_TOKEN` (or `KITTYCAD_API_TOKEN`) and `ZOO_HOST`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty(HOST_ENV).unwrap_or_else(default_host),
            token: non_empty(TOKEN_ENV).or_else(|| non_empty(LEGACY_TOKEN_ENV)),
            ..Self::default()
        }
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Set the host
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout, rounded up to whole milliseconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    /// Add a default header
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Credentials to send: `auth` if set, else the token as a bearer
    pub fn auth_config(&self) -> AuthConfig {
        match (&self.auth, &self.token) {
            (Some(auth), _) => auth.clone(),
            (None, Some(token)) => AuthConfig::bearer(token.as_str()),
            (None, None) => AuthConfig::None,
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the config for values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::missing_field("host"));
        }
        let url = url::Url::parse(&self.host)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "host",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(Error::invalid_value("timeout_ms", "must be greater than 0"));
        }
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(Error::invalid_value("token", "must not be empty"));
        }
        Ok(())
    }
}
