//! HTTP client
//!
//! Provides the request plumbing the API wrappers share:
//! - URL resolution against the configured host
//! - Default headers and authentication
//! - Query strings built from [`ScanParams`]
//! - JSON response parsing and error mapping

use crate::auth::{AuthConfig, Authenticator};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::ScanParams;
use crate::types::StringMap;
use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for HttpClientConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.host.clone(),
            timeout: config.timeout(),
            default_headers: config.headers.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client for the API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<HttpClientConfig>,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client without authentication
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Self::with_auth(config, AuthConfig::None)
    }

    /// Create a client with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;
        validate_headers(&config.default_headers)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
            authenticator: Authenticator::new(auth_config),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET a path and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &ScanParams) -> Result<T> {
        let req = self.request(Method::GET, path, query)?;
        let response = self.send(req).await?;
        parse_json(response).await
    }

    /// POST a JSON body and parse the JSON response
    pub async fn post_json<B, T>(&self, path: &str, query: &ScanParams, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path, query)?.json(body);
        let response = self.send(req).await?;
        parse_json(response).await
    }

    /// POST a raw binary body and parse the JSON response
    pub async fn post_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ScanParams,
        body: Bytes,
        content_type: &str,
    ) -> Result<T> {
        let req = self
            .request(Method::POST, path, query)?
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body);
        let response = self.send(req).await?;
        parse_json(response).await
    }

    /// DELETE a path, discarding any response body
    pub async fn delete(&self, path: &str, query: &ScanParams) -> Result<()> {
        let req = self.request(Method::DELETE, path, query)?;
        self.send(req).await?;
        Ok(())
    }

    /// Build a request with default headers, query and authentication applied
    fn request(&self, method: Method, path: &str, query: &ScanParams) -> Result<RequestBuilder> {
        let url = self.build_url(path)?;
        debug!("{} {}", method, url);

        let mut req = self.client.request(method, url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let pairs = query.to_query_pairs();
        if !pairs.is_empty() {
            req = req.query(&pairs);
        }

        Ok(self.authenticator.apply(req))
    }

    /// Send a request, mapping non-2xx responses to `Error::Api`
    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            debug!("Request succeeded: {} {}", status.as_u16(), response.url());
            return Ok(response);
        }

        let url = response.url().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read error body from {}: {}", url, e);
                format!("failed to read error body: {e}")
            }
        };
        let err = Error::from_response_body(status.as_u16(), &body);
        warn!("Request to {} failed: {}", url, err);
        Err(err)
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

/// Reject default headers reqwest would only fail on at send time
fn validate_headers(headers: &StringMap) -> Result<()> {
    for (name, value) in headers {
        let invalid = |message: String| Error::InvalidHeader {
            name: name.clone(),
            message,
        };
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    }
    Ok(())
}

/// Parse a JSON body, treating an empty body as `null`
async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await?;
    let body = if text.trim().is_empty() { "null" } else { &text };
    Ok(serde_json::from_str(body)?)
}
