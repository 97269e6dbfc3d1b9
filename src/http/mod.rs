//! HTTP client module
//!
//! Thin transport used by the resource wrappers and their page sources.
//!
//! # Features
//!
//! - **Base URL handling**: Paths are resolved against the configured host
//! - **Authentication**: Integration with auth module
//! - **Error mapping**: Non-2xx responses become [`Error::Api`](crate::Error::Api)
//!
//! Requests are sent once. Retrying is left to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
