use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// An opaque, totally ordered cursor identifying one chunk of a collection.
///
/// Implementations must be cheap to copy; the pager stores one per loaded
/// page and derives refresh/resume keys from neighbouring keys.
pub trait PageKey: Copy + Eq + Ord + Send + Sync + fmt::Debug + 'static {
    /// The key of the page after this one.
    fn successor(self) -> Self;
    /// The key of the page before this one, if any.
    fn predecessor(self) -> Option<Self>;
}

/// 1-based page number, the key type used by all collections here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageNumber(pub u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PageKey for PageNumber {
    fn successor(self) -> Self {
        PageNumber(self.0 + 1)
    }

    fn predecessor(self) -> Option<Self> {
        // Page 1 has nothing before it.
        if self.0 <= 1 {
            None
        } else {
            Some(PageNumber(self.0 - 1))
        }
    }
}

/// Parameters of one `load` call. `key == None` means "first page".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams<K> {
    pub key: Option<K>,
    pub load_size: usize,
}

/// One loaded chunk of a collection plus the keys of its neighbours.
///
/// `next_key` is `None` exactly when the server reported no further pages
/// or the page came back shorter than requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<K, T> {
    pub items: Vec<T>,
    pub prev_key: Option<K>,
    pub next_key: Option<K>,
}

/// Which end of the collection a `load_more` call grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Append,
    Prepend,
}

/// State of one load slot (refresh, append or prepend).
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Error(Arc<FeedError>),
}

impl LoadState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    /// The error cause, if this slot is in the error state.
    pub fn error(&self) -> Option<&FeedError> {
        match self {
            LoadState::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Snapshot of all three load slots, exposed to the list view.
#[derive(Debug, Clone, Default)]
pub struct LoadStates {
    pub refresh: LoadState,
    pub append: LoadState,
    pub prepend: LoadState,
}

/// Items that carry a stable identity usable for list-view diffing.
///
/// `Pager::key_of` reads this without registering demand; see the
/// peek/observe split on the pager.
pub trait Keyed {
    type Key: Clone + Eq + Hash + fmt::Debug;

    fn key(&self) -> Self::Key;
}

impl Keyed for super::item::FeedItem {
    type Key = String;

    fn key(&self) -> String {
        self.id().to_owned()
    }
}

impl Keyed for super::upcoming::UpcomingMatch {
    type Key = i64;

    fn key(&self) -> i64 {
        self.match_id
    }
}

impl Keyed for super::item::MatchResult {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}
