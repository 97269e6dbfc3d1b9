//! Pagination module
//!
//! Turns token-paginated list endpoints into plain item iterators.
//!
//! # Overview
//!
//! A page source fetches one [`Page`] for a set of [`ScanParams`]. The
//! iterators call it lazily, one page at a time, resending the scan
//! parameters plus the previous page's `next_page` as `page_token` until a
//! page arrives without a continuation token.
//!
//! - [`SyncPageIterator`] drives a blocking [`PageSource`] through `Iterator`
//! - [`AsyncPageIterator`] drives an [`AsyncPageSource`] through `Stream`
//!
//! Both share one state machine, so for the same page sequence they yield
//! the same items and issue the same requests. Each pass starts over from
//! the first page. Fetch errors are yielded as-is and end the pass.

mod blocking;
mod cursor;
mod stream;
mod types;

pub use blocking::{PageSource, SyncItems, SyncPageIterator};
pub use stream::{AsyncPageIterator, AsyncPageSource};
pub use types::{Page, ScanParams, PAGE_TOKEN_PARAM};
