//! API token endpoints

use super::{paginate, Paginated};
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ApiToken, ListParams};
use crate::pagination::ScanParams;
use crate::types::JsonObject;
use tracing::info;

const PATH: &str = "/user/api-tokens";

/// Access to the current user's API tokens
#[derive(Debug, Clone, Copy)]
pub struct ApiTokens<'a> {
    http: &'a HttpClient,
}

impl<'a> ApiTokens<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Every token, fetched page by page
    pub fn list(&self, params: ListParams) -> Paginated<ApiToken> {
        paginate(self.http, PATH, params)
    }

    /// Create a token, optionally labelled
    pub async fn create(&self, label: Option<&str>) -> Result<ApiToken> {
        let mut query = ScanParams::new();
        if let Some(label) = label {
            query.insert("label", label);
        }
        let token: ApiToken = self.http.post_json(PATH, &query, &JsonObject::new()).await?;
        info!("Created API token {}", token.id);
        Ok(token)
    }

    /// Revoke a token
    pub async fn delete(&self, token: &str) -> Result<()> {
        self.http
            .delete(&format!("{PATH}/{token}"), &ScanParams::new())
            .await?;
        info!("Deleted API token");
        Ok(())
    }
}
