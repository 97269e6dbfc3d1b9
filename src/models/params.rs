//! Typed list parameters

use super::types::CreatedAtSortMode;
use crate::pagination::{ScanParams, PAGE_TOKEN_PARAM};
use crate::types::{JsonValue, ValueMap};

/// Parameters for list endpoints.
///
/// Converts into the [`ScanParams`] a paginated list is started with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Maximum items per page
    pub limit: Option<u32>,
    /// Sort order
    pub sort_by: Option<CreatedAtSortMode>,
    /// Token to start from instead of the first page
    pub page_token: Option<String>,
    /// Endpoint-specific filters
    pub filters: ValueMap,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn sort_by(mut self, sort_by: CreatedAtSortMode) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Add an endpoint-specific filter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

impl From<ListParams> for ScanParams {
    fn from(list: ListParams) -> Self {
        let mut params = ScanParams::from(&list.filters);
        if let Some(limit) = list.limit {
            params.insert("limit", limit);
        }
        if let Some(sort_by) = list.sort_by {
            params.insert("sort_by", sort_by.as_str());
        }
        if let Some(token) = list.page_token {
            params.insert(PAGE_TOKEN_PARAM, token);
        }
        params
    }
}
