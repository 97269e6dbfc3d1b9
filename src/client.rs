//! API client
//!
//! Entry point tying configuration, transport and resources together.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::resources::{ApiCalls, ApiTokens, File, Users};
use tracing::debug;

/// Client for the Zoo API.
///
/// Cloning is cheap; clones share one connection pool.
///
/// ```rust,no_run
/// use futures::TryStreamExt;
/// use zoo_sdk::models::ListParams;
/// use zoo_sdk::Client;
///
/// # async fn run() -> zoo_sdk::Result<()> {
/// let client = Client::from_env()?;
/// let calls = client.api_calls().list(ListParams::new().limit(50));
/// let all = calls.stream().try_collect::<Vec<_>>().await?;
/// println!("{} calls", all.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let auth = config.auth_config();
        if auth.is_none() {
            debug!("No API token configured; requests will be unauthenticated");
        }

        let http = HttpClient::with_auth(HttpClientConfig::from(&config), auth)?;
        Ok(Self { http })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// User endpoints
    pub fn users(&self) -> Users<'_> {
        Users::new(&self.http)
    }

    /// API call history endpoints
    pub fn api_calls(&self) -> ApiCalls<'_> {
        ApiCalls::new(&self.http)
    }

    /// API token endpoints
    pub fn api_tokens(&self) -> ApiTokens<'_> {
        ApiTokens::new(&self.http)
    }

    /// File conversion endpoints
    pub fn file(&self) -> File<'_> {
        File::new(&self.http)
    }
}
