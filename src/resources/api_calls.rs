//! API call history endpoints

use super::{paginate, Paginated};
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ApiCallWithPrice, ListParams};
use crate::pagination::{Page, ScanParams};

const PATH: &str = "/user/api-calls";

/// Access to the current user's API call history
#[derive(Debug, Clone, Copy)]
pub struct ApiCalls<'a> {
    http: &'a HttpClient,
}

impl<'a> ApiCalls<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Every API call, fetched page by page
    pub fn list(&self, params: ListParams) -> Paginated<ApiCallWithPrice> {
        paginate(self.http, PATH, params)
    }

    /// A single raw page, for callers that manage tokens themselves
    pub async fn list_page(&self, params: ListParams) -> Result<Page<ApiCallWithPrice>> {
        self.http.get_json(PATH, &ScanParams::from(params)).await
    }

    /// One API call by id
    pub async fn get(&self, id: &str) -> Result<ApiCallWithPrice> {
        self.http
            .get_json(&format!("{PATH}/{id}"), &ScanParams::new())
            .await
    }
}
