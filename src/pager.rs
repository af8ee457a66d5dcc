//! Pagination orchestrator.
//!
//! A [`Pager`] drives one [`PageLoader`] into one continuously growing
//! collection, tracking independent load states for refresh, append and
//! prepend. Methods take `&self`: the pager is safe to share, state is
//! guarded by a mutex that is never held across a suspension point, and
//! the in-flight guard means a second request for a direction that is
//! already loading is ignored rather than queued.

use std::sync::Arc;
use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::loader::PageLoader;
use crate::types::{Direction, Keyed, LoadParams, LoadState, LoadStates, Page, PageKey};

/// What a pager operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was committed; the number of items added.
    Loaded(usize),
    /// Nothing to do: end of data, a load already in flight, or no failed
    /// load to retry. The slot state is unchanged.
    Skipped,
    /// The load failed; the slot now carries the error and `retry` will
    /// re-issue it.
    Failed,
    /// The coordinator shut down mid-load; nothing was committed.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Refresh,
    Append,
    Prepend,
}

/// Bookkeeping for one committed page, in collection order.
#[derive(Debug, Clone, Copy)]
struct PageMeta<K> {
    /// The key the page was requested with (`None` = initial load).
    key: Option<K>,
    prev_key: Option<K>,
    next_key: Option<K>,
    /// Offset of the page's first item in the collection.
    start: usize,
    len: usize,
}

#[derive(Debug)]
struct FailedLoad<K> {
    slot: Slot,
    params: LoadParams<K>,
}

struct PagerState<K, T> {
    items: Vec<T>,
    pages: Vec<PageMeta<K>>,
    /// Boundary key for prepending (first loaded page's predecessor).
    prev_key: Option<K>,
    /// Boundary key for appending (last loaded page's successor).
    next_key: Option<K>,
    refresh: LoadState,
    append: LoadState,
    prepend: LoadState,
    /// Index nearest to what the user was last viewing; fed only by
    /// `observe`, consumed only by the refresh-key computation.
    anchor: Option<usize>,
    last_failed: Option<FailedLoad<K>>,
}

impl<K, T> Default for PagerState<K, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pages: Vec::new(),
            prev_key: None,
            next_key: None,
            refresh: LoadState::Idle,
            append: LoadState::Idle,
            prepend: LoadState::Idle,
            anchor: None,
            last_failed: None,
        }
    }
}

impl<K: PageKey, T> PagerState<K, T> {
    fn slot_mut(&mut self, slot: Slot) -> &mut LoadState {
        match slot {
            Slot::Refresh => &mut self.refresh,
            Slot::Append => &mut self.append,
            Slot::Prepend => &mut self.prepend,
        }
    }

    /// The key of the page a refresh should resume from.
    ///
    /// Finds the loaded page containing the anchor index and derives its
    /// key from its neighbours, preferring `prev_key`'s successor, then
    /// `next_key`'s predecessor, then the key it was requested with.
    /// Pure: calling it twice on the same state yields the same key.
    fn refresh_key(&self) -> Option<K> {
        let anchor = self.anchor?;
        let meta = self
            .pages
            .iter()
            .find(|p| anchor >= p.start && anchor < p.start + p.len)?;
        meta.prev_key
            .map(PageKey::successor)
            .or_else(|| meta.next_key.and_then(PageKey::predecessor))
            .or(meta.key)
    }

    fn commit(&mut self, slot: Slot, params: LoadParams<K>, page: Page<K, T>) -> usize {
        let len = page.items.len();
        match slot {
            Slot::Refresh => {
                self.items = page.items;
                self.pages = vec![PageMeta {
                    key: params.key,
                    prev_key: page.prev_key,
                    next_key: page.next_key,
                    start: 0,
                    len,
                }];
                self.prev_key = page.prev_key;
                self.next_key = page.next_key;
                self.anchor = None;
                self.refresh = LoadState::Idle;
                // The collection was replaced; stale append/prepend errors
                // no longer describe it.
                self.append = LoadState::Idle;
                self.prepend = LoadState::Idle;
                self.last_failed = None;
            }
            Slot::Append => {
                let start = self.items.len();
                self.items.extend(page.items);
                self.pages.push(PageMeta {
                    key: params.key,
                    prev_key: page.prev_key,
                    next_key: page.next_key,
                    start,
                    len,
                });
                self.next_key = page.next_key;
                self.append = LoadState::Idle;
            }
            Slot::Prepend => {
                self.items.splice(0..0, page.items);
                for meta in &mut self.pages {
                    meta.start += len;
                }
                self.pages.insert(
                    0,
                    PageMeta {
                        key: params.key,
                        prev_key: page.prev_key,
                        next_key: page.next_key,
                        start: 0,
                        len,
                    },
                );
                self.prev_key = page.prev_key;
                self.anchor = self.anchor.map(|a| a + len);
                self.prepend = LoadState::Idle;
            }
        }
        if self
            .last_failed
            .as_ref()
            .is_some_and(|f| f.slot == slot)
        {
            self.last_failed = None;
        }
        len
    }
}

/// Drives one loader into one growing collection.
pub struct Pager<L: PageLoader> {
    loader: L,
    load_size: usize,
    cancel: CancellationToken,
    state: Mutex<PagerState<L::Key, L::Item>>,
}

impl<L: PageLoader> Pager<L> {
    pub fn new(loader: L, load_size: usize, cancel: CancellationToken) -> Self {
        Self {
            loader,
            load_size,
            cancel,
            state: Mutex::new(PagerState::default()),
        }
    }

    // --- Collection surface (consumed by the list view) ---

    /// Number of items loaded so far.
    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// The item at `index`, or `None` if that index is not loaded.
    pub fn get(&self, index: usize) -> Option<L::Item> {
        self.lock().items.get(index).cloned()
    }

    /// Stable identity of the item at `index`, for list-view diffing.
    ///
    /// A pure peek: unlike [`observe`](Self::observe) it registers no
    /// demand and never influences what gets loaded next.
    pub fn key_of(&self, index: usize) -> Option<<L::Item as Keyed>::Key> {
        self.lock().items.get(index).map(Keyed::key)
    }

    /// Report that the item at `index` is being rendered.
    ///
    /// The only accessor that feeds the refresh anchor; a refresh resumes
    /// from the page containing the last observed index.
    pub fn observe(&self, index: usize) {
        let mut st = self.lock();
        if index < st.items.len() {
            st.anchor = Some(index);
        }
    }

    /// Snapshot of the refresh/append/prepend load states.
    pub fn load_states(&self) -> LoadStates {
        let st = self.lock();
        LoadStates {
            refresh: st.refresh.clone(),
            append: st.append.clone(),
            prepend: st.prepend.clone(),
        }
    }

    /// Whether more data is available in the given direction. `false`
    /// means end-of-data, a terminal state distinct from an error.
    pub fn has_more(&self, direction: Direction) -> bool {
        let st = self.lock();
        match direction {
            Direction::Append => st.next_key.is_some(),
            Direction::Prepend => st.prev_key.is_some(),
        }
    }

    /// The key a refresh would resume from, or `None` for the first page.
    pub fn refresh_key(&self) -> Option<L::Key> {
        self.lock().refresh_key()
    }

    // --- Loading operations ---

    /// Reload the collection, resuming near the last observed position.
    ///
    /// On success the collection is replaced atomically with the returned
    /// page. On failure the old collection is kept and the `refresh` slot
    /// carries the error.
    pub async fn refresh(&self) -> LoadOutcome {
        let params = {
            let mut st = self.lock();
            if st.refresh.is_loading() {
                return LoadOutcome::Skipped;
            }
            let key = st.refresh_key();
            st.refresh = LoadState::Loading;
            LoadParams {
                key,
                load_size: self.load_size,
            }
        };
        self.execute(Slot::Refresh, params).await
    }

    /// Grow the collection one page in `direction`.
    ///
    /// A no-op when the boundary key is absent (end of data) or a load for
    /// the same direction is already in flight; neither case is an error.
    pub async fn load_more(&self, direction: Direction) -> LoadOutcome {
        let slot = match direction {
            Direction::Append => Slot::Append,
            Direction::Prepend => Slot::Prepend,
        };
        let params = {
            let mut st = self.lock();
            let boundary = match direction {
                Direction::Append => st.next_key,
                Direction::Prepend => st.prev_key,
            };
            if st.slot_mut(slot).is_loading() {
                debug!(?slot, "load already in flight; ignored");
                return LoadOutcome::Skipped;
            }
            let Some(key) = boundary else {
                debug!(?slot, "end of data; ignored");
                return LoadOutcome::Skipped;
            };
            *st.slot_mut(slot) = LoadState::Loading;
            LoadParams {
                key: Some(key),
                load_size: self.load_size,
            }
        };
        self.execute(slot, params).await
    }

    /// Re-issue the last failed load with its original parameters.
    pub async fn retry(&self) -> LoadOutcome {
        let (slot, params) = {
            let mut st = self.lock();
            let Some(failed) = st.last_failed.take() else {
                return LoadOutcome::Skipped;
            };
            if st.slot_mut(failed.slot).is_loading() {
                st.last_failed = Some(failed);
                return LoadOutcome::Skipped;
            }
            *st.slot_mut(failed.slot) = LoadState::Loading;
            (failed.slot, failed.params)
        };
        self.execute(slot, params).await
    }

    // --- Internals ---

    async fn execute(&self, slot: Slot, params: LoadParams<L::Key>) -> LoadOutcome {
        debug!(?slot, key = ?params.key, "load started");
        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            res = self.loader.load(params) => Some(res),
        };

        let mut st = self.lock();
        match result {
            None => {
                *st.slot_mut(slot) = LoadState::Idle;
                debug!(?slot, "load cancelled; nothing committed");
                LoadOutcome::Cancelled
            }
            Some(Ok(page)) => {
                let added = st.commit(slot, params, page);
                debug!(?slot, added, total = st.items.len(), "load committed");
                LoadOutcome::Loaded(added)
            }
            Some(Err(e)) => {
                warn!(?slot, error = %e, "load failed");
                *st.slot_mut(slot) = LoadState::Error(Arc::new(e));
                st.last_failed = Some(FailedLoad { slot, params });
                LoadOutcome::Failed
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PagerState<L::Key, L::Item>> {
        self.state.lock().expect("pager state poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageNumber;

    fn meta(
        key: Option<u32>,
        prev: Option<u32>,
        next: Option<u32>,
        start: usize,
        len: usize,
    ) -> PageMeta<PageNumber> {
        PageMeta {
            key: key.map(PageNumber),
            prev_key: prev.map(PageNumber),
            next_key: next.map(PageNumber),
            start,
            len,
        }
    }

    fn state_with_pages(
        pages: Vec<PageMeta<PageNumber>>,
        anchor: Option<usize>,
    ) -> PagerState<PageNumber, String> {
        let total: usize = pages.iter().map(|p| p.len).sum();
        PagerState {
            items: (0..total).map(|i| format!("item-{i}")).collect(),
            pages,
            anchor,
            ..PagerState::default()
        }
    }

    #[test]
    fn test_refresh_key_none_without_anchor() {
        let st = state_with_pages(vec![meta(None, None, Some(2), 0, 18)], None);
        assert_eq!(st.refresh_key(), None);
    }

    #[test]
    fn test_refresh_key_prefers_prev_key_successor() {
        // Pages 2..=4 loaded, anchor inside page 3 (items 18..36).
        let st = state_with_pages(
            vec![
                meta(Some(2), Some(1), Some(3), 0, 18),
                meta(Some(3), Some(2), Some(4), 18, 18),
                meta(Some(4), Some(3), None, 36, 18),
            ],
            Some(20),
        );
        assert_eq!(st.refresh_key(), Some(PageNumber(3)));
    }

    #[test]
    fn test_refresh_key_falls_back_to_next_key_predecessor() {
        // First page loaded with no key and no prev; next says page 2.
        let st = state_with_pages(vec![meta(None, None, Some(2), 0, 18)], Some(5));
        assert_eq!(st.refresh_key(), Some(PageNumber(1)));
    }

    #[test]
    fn test_refresh_key_single_page_collection() {
        // No prev, no next: falls through to the requested key (None).
        let st = state_with_pages(vec![meta(None, None, None, 0, 7)], Some(3));
        assert_eq!(st.refresh_key(), None);
    }

    #[test]
    fn test_refresh_key_is_idempotent() {
        let st = state_with_pages(
            vec![
                meta(Some(2), Some(1), Some(3), 0, 10),
                meta(Some(3), Some(2), Some(4), 10, 10),
            ],
            Some(14),
        );
        let first = st.refresh_key();
        let second = st.refresh_key();
        assert_eq!(first, second);
        assert_eq!(first, Some(PageNumber(3)));
    }

    #[test]
    fn test_prepend_commit_shifts_pages_and_anchor() {
        let mut st = state_with_pages(
            vec![meta(Some(3), Some(2), Some(4), 0, 10)],
            Some(4),
        );
        let added = st.commit(
            Slot::Prepend,
            LoadParams {
                key: Some(PageNumber(2)),
                load_size: 10,
            },
            Page {
                items: (0..10).map(|i| format!("older-{i}")).collect(),
                prev_key: Some(PageNumber(1)),
                next_key: Some(PageNumber(3)),
            },
        );
        assert_eq!(added, 10);
        assert_eq!(st.items.len(), 20);
        assert_eq!(st.items[0], "older-0");
        // The previously loaded page moved down; the anchor tracked it.
        assert_eq!(st.pages[1].start, 10);
        assert_eq!(st.anchor, Some(14));
        assert_eq!(st.prev_key, Some(PageNumber(1)));
    }

    #[test]
    fn test_refresh_commit_replaces_everything() {
        let mut st = state_with_pages(
            vec![
                meta(None, None, Some(2), 0, 18),
                meta(Some(2), Some(1), Some(3), 18, 18),
            ],
            Some(30),
        );
        st.append = LoadState::Error(Arc::new(crate::error::FeedError::Http {
            status: 500,
            message: "boom".to_string(),
        }));

        st.commit(
            Slot::Refresh,
            LoadParams {
                key: Some(PageNumber(2)),
                load_size: 18,
            },
            Page {
                items: vec!["fresh".to_string()],
                prev_key: Some(PageNumber(1)),
                next_key: Some(PageNumber(3)),
            },
        );

        assert_eq!(st.items, vec!["fresh".to_string()]);
        assert_eq!(st.pages.len(), 1);
        assert_eq!(st.anchor, None);
        assert!(st.append.is_idle());
        assert_eq!(st.next_key, Some(PageNumber(3)));
    }
}
