//! User endpoints

use super::{paginate, Paginated};
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ListParams, User};
use crate::pagination::ScanParams;

/// Access to `/user` and `/users`
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    http: &'a HttpClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// The user the token belongs to
    pub async fn me(&self) -> Result<User> {
        self.http.get_json("/user", &ScanParams::new()).await
    }

    /// All users visible to the caller
    pub fn list(&self, params: ListParams) -> Paginated<User> {
        paginate(self.http, "/users", params)
    }
}
