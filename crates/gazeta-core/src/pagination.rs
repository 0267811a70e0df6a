//! Cursor pagination over a paginated post listing.
//!
//! The listing endpoint returns batches of posts plus an opaque `next_page`
//! URL. [`PostWalker`] owns the accumulated results and the cursor; the
//! actual fetch is behind [`PageFetcher`], which the HTTP service implements
//! with its CMS client and tests implement with canned pages.

use crate::post::{PostPage, PostSummary};

/// Resolves the page of results behind an opaque `next_page` URL.
pub trait PageFetcher {
    /// Error the fetch can fail with.
    type Error;

    /// Fetch the page at `url`.
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<PostPage, Self::Error>> + Send;
}

/// Walks a paginated listing one page at a time, accumulating results.
///
/// Construction takes the first page, already fetched by the caller. Results
/// from later pages are appended in arrival order; nothing is de-duplicated,
/// so a record the source repeats across pages shows up twice in the
/// accumulated sequence.
///
/// `load_more` takes `&mut self`, so two loads can never overlap on the same
/// walker.
#[derive(Debug)]
pub struct PostWalker<F> {
    fetcher: F,
    results: Vec<PostSummary>,
    next_page: Option<String>,
}

impl<F: PageFetcher> PostWalker<F> {
    /// Create a walker from the first page of a listing.
    pub fn new(fetcher: F, first_page: PostPage) -> Self {
        Self {
            fetcher,
            results: first_page.results,
            next_page: first_page.next_page,
        }
    }

    /// Whether another page can be loaded.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// The current cursor, if any.
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// Posts accumulated so far, in listing order.
    pub fn results(&self) -> &[PostSummary] {
        &self.results
    }

    /// Consume the walker, returning the accumulated posts.
    pub fn into_results(self) -> Vec<PostSummary> {
        self.results
    }

    /// Fetch the page at the current cursor and append its results.
    ///
    /// Returns how many posts were appended. When the listing is already
    /// exhausted this is a no-op returning 0. On a fetch error the cursor
    /// and accumulated results are left unchanged, so the call can be
    /// retried.
    pub async fn load_more(&mut self) -> Result<usize, F::Error> {
        let Some(url) = self.next_page.clone() else {
            return Ok(0);
        };

        let page = self.fetcher.fetch_page(&url).await?;
        let appended = page.results.len();
        self.results.extend(page.results);
        self.next_page = page.next_page;
        Ok(appended)
    }
}
