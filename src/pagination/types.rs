//! Pagination types
//!
//! Defines the page shape read by the iterators and the scan parameters
//! they resend on every fetch.

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Deserializer, Serialize};

/// Name of the request parameter carrying the continuation token
pub const PAGE_TOKEN_PARAM: &str = "page_token";

// ============================================================================
// Page
// ============================================================================

/// One page of results from a token-paginated list endpoint.
///
/// Mirrors the API's `*ResultsPage` schemas. Only `items` and `next_page`
/// are read; a missing or `null` `items` deserializes to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Records on this page, in server order
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
    /// Continuation token for the next page; `None` or empty on the last page
    #[serde(default)]
    pub next_page: Option<String>,
}

impl<T> Page<T> {
    /// Create a page with an optional continuation token
    pub fn new(items: Vec<T>, next_page: Option<String>) -> Self {
        Self { items, next_page }
    }

    /// Create a final page (no continuation token)
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page: None,
        }
    }

    /// Create a page that continues with the given token
    pub fn with_next(items: Vec<T>, token: impl Into<String>) -> Self {
        Self {
            items,
            next_page: Some(token.into()),
        }
    }

    /// The continuation token, if it signals another page.
    ///
    /// An empty string is treated the same as no token.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|t| !t.is_empty())
    }

    /// Check whether another page follows this one
    pub fn has_more(&self) -> bool {
        self.next_token().is_some()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::last(Vec::new())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Scan Parameters
// ============================================================================

/// The fixed request parameters of one paginated scan.
///
/// Filters, sort order and page size live here. The iterators own their
/// copy and resend every entry on every page fetch; the continuation token
/// is layered on top per request and never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanParams(JsonObject);

impl ScanParams {
    /// Create empty scan parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a parameter
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Get a string parameter
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(JsonValue::as_str)
    }

    /// Check if a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The `page_token` parameter, if set
    pub fn page_token(&self) -> Option<&str> {
        self.get_str(PAGE_TOKEN_PARAM)
    }

    /// Copy of these parameters with `page_token` set to `token`
    #[must_use]
    pub fn with_page_token(&self, token: &str) -> Self {
        self.clone().with(PAGE_TOKEN_PARAM, token)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.0.iter()
    }

    /// Render as URL query pairs.
    ///
    /// Strings are sent unquoted, `null` entries are skipped, arrays are
    /// comma-joined and other values use their JSON text.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
            .collect()
    }

    /// Borrow the underlying JSON object
    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }
}

fn query_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Array(values) => Some(
            values
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

impl<K, V> FromIterator<(K, V)> for ScanParams
where
    K: Into<String>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<JsonObject> for ScanParams {
    fn from(map: JsonObject) -> Self {
        Self(map)
    }
}

impl<'a, K, V> From<&'a std::collections::HashMap<K, V>> for ScanParams
where
    K: AsRef<str>,
    V: Clone + Into<JsonValue>,
{
    fn from(map: &'a std::collections::HashMap<K, V>) -> Self {
        map.iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.clone()))
            .collect()
    }
}
