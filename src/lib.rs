// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Zoo SDK
//!
//! A Rust client for the Zoo CAD/ML API with transparent auto-pagination.
//!
//! ## Features
//!
//! - **Auto-pagination**: List endpoints become plain item iterators that
//!   fetch pages lazily by following `next_page` tokens
//! - **Sync and async**: [`SyncPageIterator`] for `Iterator`,
//!   [`AsyncPageIterator`] for `Stream`, sharing one state machine
//! - **Typed resources**: users, API calls, API tokens and file conversion
//! - **Config from env or YAML**: `ZOO_API_TOKEN`, `ZOO_HOST`, or a file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use zoo_sdk::{models::ListParams, Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!
//!     let calls = client.api_calls().list(ListParams::new().limit(100));
//!     let mut stream = std::pin::pin!(calls.stream());
//!     while let Some(call) = stream.try_next().await? {
//!         println!("{} {:?}", call.id, call.endpoint);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         Client                          │
//! │   users()   api_calls()   api_tokens()   file()         │
//! └─────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴─────────────┬──────────────┐
//! │   Resources  │        Pagination         │    Models    │
//! ├──────────────┼───────────────────────────┼──────────────┤
//! │ ListEndpoint │ PageCursor (shared)       │ User         │
//! │ Paginated<T> │ SyncPageIterator          │ ApiToken     │
//! │              │ AsyncPageIterator         │ ListParams   │
//! └──────────────┴───────────────────────────┴──────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────┐
//! │        HTTP (reqwest) + Auth + Config + Error           │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication schemes
pub mod auth;

/// HTTP transport
pub mod http;

/// Token-based auto-pagination
pub mod pagination;

/// Client configuration
pub mod config;

/// API request and response types
pub mod models;

/// Endpoint wrappers
pub mod resources;

/// Client entry point
mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{AsyncPageIterator, Page, PageSource, ScanParams, SyncPageIterator};
pub use resources::Paginated;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
