//! The page-by-page loading contract shared by every collection.
//!
//! One trait, one key-computation rule, three concrete loaders. The pager
//! is generic over [`PageLoader`], so the main feed, upcoming fixtures and
//! match results all run through the same state machine and differ only in
//! their fetch + decode step.

pub mod feed;
pub mod results;
pub mod upcoming;

use std::future::Future;

use crate::error::Result;
use crate::types::{Keyed, LoadParams, Page, PageKey, PageNumber, PaginationInfo};

/// A source of pages for one collection.
pub trait PageLoader: Send + Sync {
    type Key: PageKey;
    type Item: Keyed + Clone + Send + Sync + 'static;

    /// Load one page. `params.key == None` requests the first page.
    ///
    /// Either a complete page or an error; a failed fetch never yields a
    /// partial page.
    fn load(
        &self,
        params: LoadParams<Self::Key>,
    ) -> impl Future<Output = Result<Page<Self::Key, Self::Item>>> + Send;
}

/// Compute `(prev_key, next_key)` for a fetched page.
///
/// `prev` is simply the predecessor (absent at page 1). `next` exists only
/// if the server says more data is available AND the page came back full;
/// a short page ends pagination even when the server hint disagrees.
pub fn page_keys(
    page: PageNumber,
    requested_size: usize,
    returned_len: usize,
    pagination: &PaginationInfo,
) -> (Option<PageNumber>, Option<PageNumber>) {
    let prev = page.predecessor();
    let next = if pagination.has_next && returned_len == requested_size {
        Some(page.successor())
    } else {
        None
    };
    (prev, next)
}

/// The page number actually requested for `params`, defaulting to page 1.
pub(crate) fn requested_page(params: &LoadParams<PageNumber>) -> PageNumber {
    params.key.unwrap_or(PageNumber::FIRST)
}
