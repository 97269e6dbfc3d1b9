//! Async page iterator
//!
//! Same state machine as the blocking iterator, but each page fetch is
//! awaited and items are delivered through a `futures::Stream`. Pages are
//! fetched strictly one after another; nothing is prefetched.

use super::cursor::{CursorStep, PageCursor};
use super::types::{Page, ScanParams};
use futures::stream::{self, Stream};
use std::future::Future;
use std::marker::PhantomData;
use tracing::debug;

/// An async page fetch function
pub trait AsyncPageSource<T> {
    /// Error returned by a failed fetch
    type Error;

    /// Fetch one page with the given request parameters
    fn fetch_page(&self, params: ScanParams)
        -> impl Future<Output = Result<Page<T>, Self::Error>>;
}

impl<T, E, F, Fut> AsyncPageSource<T> for F
where
    F: Fn(ScanParams) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    type Error = E;

    fn fetch_page(&self, params: ScanParams) -> impl Future<Output = Result<Page<T>, E>> {
        self(params)
    }
}

/// Restartable async iterator over the items of a paginated scan.
///
/// Every call to [`stream`](Self::stream) starts a fresh pass from the
/// first page. The returned stream is not `Unpin`; pin it (for example with
/// `futures::pin_mut!` or `Box::pin`) before calling `next()`, or use the
/// `TryStreamExt` combinators directly.
///
/// ```rust
/// use futures::TryStreamExt;
/// use zoo_sdk::pagination::{AsyncPageIterator, Page, ScanParams};
///
/// # tokio_test::block_on(async {
/// let pager = AsyncPageIterator::new(
///     |params: ScanParams| async move {
///         match params.page_token() {
///             None => Ok::<_, String>(Page::with_next(vec![1u32, 2], "p2")),
///             Some(_) => Ok(Page::last(vec![3])),
///         }
///     },
///     ScanParams::new().with("limit", 2),
/// );
///
/// let items: Vec<u32> = pager.stream().try_collect().await.unwrap();
/// assert_eq!(items, vec![1, 2, 3]);
/// # });
/// ```
pub struct AsyncPageIterator<T, S> {
    source: S,
    params: ScanParams,
    _item: PhantomData<fn() -> T>,
}

impl<T, S> AsyncPageIterator<T, S>
where
    S: AsyncPageSource<T>,
{
    /// Create an iterator over `source` with the given scan parameters
    pub fn new(source: S, params: impl Into<ScanParams>) -> Self {
        Self {
            source,
            params: params.into(),
            _item: PhantomData,
        }
    }

    /// Start a new pass over all pages.
    ///
    /// The only suspension point is the fetch of the next page. Dropping
    /// the stream mid-pass drops any in-flight fetch with it.
    pub fn stream(&self) -> impl Stream<Item = Result<T, S::Error>> + '_ {
        let pass = Pass {
            source: &self.source,
            params: &self.params,
            cursor: PageCursor::new(),
        };

        stream::unfold(pass, |mut pass| async move {
            loop {
                match pass.cursor.step(pass.params) {
                    CursorStep::Yield(item) => return Some((Ok(item), pass)),
                    CursorStep::Fetch(request) => match pass.source.fetch_page(request).await {
                        Ok(page) => pass.cursor.advance(page),
                        Err(err) => {
                            pass.cursor.fail();
                            return Some((Err(err), pass));
                        }
                    },
                    CursorStep::Done => {
                        debug!(
                            "Pagination finished after {} pages",
                            pass.cursor.pages_fetched()
                        );
                        return None;
                    }
                }
            }
        })
    }

    /// Drain one full pass into a vector, stopping at the first error
    pub async fn collect_all(&self) -> Result<Vec<T>, S::Error> {
        use futures::TryStreamExt;

        self.stream().try_collect().await
    }

    /// The scan parameters sent with every fetch
    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    /// The underlying page source
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<T, S> std::fmt::Debug for AsyncPageIterator<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncPageIterator")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// State carried between stream steps
struct Pass<'a, T, S> {
    source: &'a S,
    params: &'a ScanParams,
    cursor: PageCursor<T>,
}
