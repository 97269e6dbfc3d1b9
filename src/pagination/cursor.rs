//! Per-pass pagination state machine
//!
//! Both iterator variants drive a `PageCursor`: it decides whether the next
//! step yields a buffered item, fetches a page, or ends the pass. Only the
//! way a fetch is performed differs between the blocking and async drivers.

use super::types::{Page, ScanParams, PAGE_TOKEN_PARAM};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// What the driver should do next
#[derive(Debug)]
pub(crate) enum CursorStep<T> {
    /// Hand this item to the consumer
    Yield(T),
    /// Fetch a page with these request parameters, then call `advance`
    Fetch(ScanParams),
    /// The pass is over
    Done,
}

/// Cursor and exhaustion state for one iteration pass
#[derive(Debug)]
pub(crate) struct PageCursor<T> {
    /// Continuation token from the last fetched page
    token: Option<String>,
    /// Set once a page arrives without a continuation token
    exhausted: bool,
    /// Items of the current page not yet handed out
    buffer: VecDeque<T>,
    /// Pages fetched during this pass
    pages_fetched: u32,
}

impl<T> PageCursor<T> {
    /// Start a new pass
    pub(crate) fn new() -> Self {
        Self {
            token: None,
            exhausted: false,
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Decide the next step of the pass.
    ///
    /// Buffered items are drained before another page is requested, so a
    /// page is only fetched when the consumer asks for an item past the end
    /// of the previous one.
    pub(crate) fn step(&mut self, base: &ScanParams) -> CursorStep<T> {
        if let Some(item) = self.buffer.pop_front() {
            return CursorStep::Yield(item);
        }
        if self.exhausted {
            return CursorStep::Done;
        }
        CursorStep::Fetch(self.request_params(base))
    }

    /// Request parameters for the next fetch.
    ///
    /// A `page_token` already present in `base` goes out untouched on the
    /// first fetch; afterwards the server's token replaces it.
    fn request_params(&self, base: &ScanParams) -> ScanParams {
        let params = match &self.token {
            Some(token) => base.with_page_token(token),
            None => base.clone(),
        };
        debug!(
            "Fetching page {} (page_token: {:?})",
            self.pages_fetched + 1,
            params.get_str(PAGE_TOKEN_PARAM)
        );
        params
    }

    /// Absorb a fetched page
    pub(crate) fn advance(&mut self, page: Page<T>) {
        self.pages_fetched += 1;
        let next = page.next_token().map(str::to_string);
        trace!(
            "Page {} returned {} items, has_more: {}",
            self.pages_fetched,
            page.items.len(),
            next.is_some()
        );
        self.buffer.extend(page.items);
        match next {
            Some(token) => self.token = Some(token),
            None => self.exhausted = true,
        }
    }

    /// End the pass after a failed fetch
    pub(crate) fn fail(&mut self) {
        self.buffer.clear();
        self.exhausted = true;
    }

    /// Pages fetched so far in this pass
    pub(crate) fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }
}
