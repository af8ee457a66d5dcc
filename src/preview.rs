//! Hand-off cell for the carousel preview.
//!
//! The main-feed loader writes the preview list here whenever a carousel
//! passes through its transform step; the preview-seeded loader takes it
//! exactly once, at construction. This is the only state shared between
//! the two pagers, so the cell is its own small synchronized type instead
//! of a bare field on something long-lived.

use std::sync::Mutex;

use tracing::debug;

use crate::types::UpcomingMatch;

/// Single-writer, read-once holder for the latest carousel preview.
#[derive(Debug, Default)]
pub struct PreviewCache {
    slot: Mutex<Option<Vec<UpcomingMatch>>>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the cached preview. Called on every carousel sighting;
    /// a later main-feed refresh replaces an older preview wholesale.
    pub fn store(&self, items: Vec<UpcomingMatch>) {
        debug!(count = items.len(), "preview cache updated");
        *self.slot.lock().expect("preview cache poisoned") = Some(items);
    }

    /// Consume the cached preview. Returns `None` if nothing was stored
    /// since the last take, in which case the caller degrades to plain
    /// pagination.
    pub fn take(&self) -> Option<Vec<UpcomingMatch>> {
        self.slot.lock().expect("preview cache poisoned").take()
    }

    /// Number of currently cached preview items, without consuming them.
    pub fn len(&self) -> usize {
        self.slot
            .lock()
            .expect("preview cache poisoned")
            .as_ref()
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
