// ── Store snapshot ──

use std::sync::Arc;

use crate::error::SyncError;

/// The externally observable state of one synchronization store.
///
/// Invariants:
/// - `loading` is true only during the first fetch after construction
///   or an explicit full reload; `refreshing` only during background
///   ticks. The two are never true at once.
/// - A failed fetch sets `error` and leaves `items` untouched (the
///   `Arc` is literally the same allocation as before the call).
/// - Any subsequent successful fetch clears `error`.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// Current item list. Shared: cloning a snapshot is cheap.
    pub items: Arc<Vec<T>>,
    /// First load in progress.
    pub loading: bool,
    /// Background refresh in progress.
    pub refreshing: bool,
    /// Most recent fetch failure, cleared by the next success.
    pub error: Option<SyncError>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            loading: false,
            refreshing: false,
            error: None,
        }
    }
}

impl<T> Snapshot<T> {
    /// A fetch (initial or background) is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.refreshing
    }
}
