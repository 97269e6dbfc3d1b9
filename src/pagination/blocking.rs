//! Blocking page iterator
//!
//! Pulls pages on demand from a [`PageSource`] and yields their items one
//! at a time through the standard `Iterator` trait.

use super::cursor::{CursorStep, PageCursor};
use super::types::{Page, ScanParams};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use tracing::debug;

/// A blocking page fetch function
pub trait PageSource<T> {
    /// Error returned by a failed fetch
    type Error;

    /// Fetch one page with the given request parameters
    fn fetch_page(&self, params: ScanParams) -> Result<Page<T>, Self::Error>;
}

impl<T, E, F> PageSource<T> for F
where
    F: Fn(ScanParams) -> Result<Page<T>, E>,
{
    type Error = E;

    fn fetch_page(&self, params: ScanParams) -> Result<Page<T>, E> {
        self(params)
    }
}

/// Restartable blocking iterator over the items of a paginated scan.
///
/// Holds the page source and the scan parameters. Every call to
/// [`iter`](Self::iter) starts a fresh pass from the first page.
///
/// ```rust
/// use zoo_sdk::pagination::{Page, ScanParams, SyncPageIterator};
///
/// let pager = SyncPageIterator::new(
///     |params: ScanParams| -> Result<Page<u32>, String> {
///         match params.page_token() {
///             None => Ok(Page::with_next(vec![1u32, 2], "p2")),
///             Some(_) => Ok(Page::last(vec![3])),
///         }
///     },
///     ScanParams::new().with("limit", 2),
/// );
///
/// let items: Vec<u32> = pager.iter().collect::<Result<_, _>>().unwrap();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
pub struct SyncPageIterator<T, S> {
    source: S,
    params: ScanParams,
    _item: PhantomData<fn() -> T>,
}

impl<T, S> SyncPageIterator<T, S>
where
    S: PageSource<T>,
{
    /// Create an iterator over `source` with the given scan parameters
    pub fn new(source: S, params: impl Into<ScanParams>) -> Self {
        Self {
            source,
            params: params.into(),
            _item: PhantomData,
        }
    }

    /// Start a new pass over all pages
    pub fn iter(&self) -> SyncItems<'_, T, S> {
        SyncItems {
            source: &self.source,
            params: &self.params,
            cursor: PageCursor::new(),
        }
    }

    /// Drain one full pass into a vector, stopping at the first error
    pub fn collect_all(&self) -> Result<Vec<T>, S::Error> {
        self.iter().collect()
    }

    /// The scan parameters sent with every fetch
    pub fn params(&self) -> &ScanParams {
        &self.params
    }
}

impl<'a, T, S> IntoIterator for &'a SyncPageIterator<T, S>
where
    S: PageSource<T>,
{
    type Item = Result<T, S::Error>;
    type IntoIter = SyncItems<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> std::fmt::Debug for SyncPageIterator<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncPageIterator")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// One pass over a [`SyncPageIterator`]
pub struct SyncItems<'a, T, S> {
    source: &'a S,
    params: &'a ScanParams,
    cursor: PageCursor<T>,
}

impl<T, S> Iterator for SyncItems<'_, T, S>
where
    S: PageSource<T>,
{
    type Item = Result<T, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cursor.step(self.params) {
                CursorStep::Yield(item) => return Some(Ok(item)),
                CursorStep::Fetch(request) => match self.source.fetch_page(request) {
                    Ok(page) => self.cursor.advance(page),
                    Err(err) => {
                        self.cursor.fail();
                        return Some(Err(err));
                    }
                },
                CursorStep::Done => {
                    debug!(
                        "Pagination finished after {} pages",
                        self.cursor.pages_fetched()
                    );
                    return None;
                }
            }
        }
    }
}

impl<T, S> FusedIterator for SyncItems<'_, T, S> where S: PageSource<T> {}
