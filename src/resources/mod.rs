//! Resources module
//!
//! Thin wrappers over the API's endpoints, grouped the way the API groups
//! them. List endpoints return a [`Paginated`] iterator that fetches pages
//! on demand through a [`ListEndpoint`].

mod api_calls;
mod api_tokens;
mod file;
mod users;

pub use api_calls::ApiCalls;
pub use api_tokens::ApiTokens;
pub use file::File;
pub use users::Users;

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{AsyncPageIterator, AsyncPageSource, Page, ScanParams};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Auto-paginating iterator over a list endpoint
pub type Paginated<T> = AsyncPageIterator<T, ListEndpoint<T>>;

/// Page source issuing one GET per page against a fixed path
pub struct ListEndpoint<T> {
    http: HttpClient,
    path: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> ListEndpoint<T> {
    /// Create a source for `path` on the given client
    pub fn new(http: HttpClient, path: impl Into<String>) -> Self {
        Self {
            http,
            path: path.into(),
            _item: PhantomData,
        }
    }

    /// Path requested for every page
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T> Clone for ListEndpoint<T> {
    fn clone(&self) -> Self {
        Self::new(self.http.clone(), self.path.clone())
    }
}

impl<T> std::fmt::Debug for ListEndpoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEndpoint")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl<T: DeserializeOwned> AsyncPageSource<T> for ListEndpoint<T> {
    type Error = Error;

    async fn fetch_page(&self, params: ScanParams) -> Result<Page<T>> {
        self.http.get_json(&self.path, &params).await
    }
}

/// Build a paginated list over `path`
pub(crate) fn paginate<T: DeserializeOwned>(
    http: &HttpClient,
    path: &str,
    params: impl Into<ScanParams>,
) -> Paginated<T> {
    AsyncPageIterator::new(ListEndpoint::new(http.clone(), path), params)
}

#[cfg(test)]
mod tests;
