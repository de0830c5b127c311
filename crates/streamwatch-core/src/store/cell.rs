// ── Shared synchronization discipline ──
//
// Both stores follow the same refresh protocol; this cell implements it
// once. The async gate gives each resource at most one in-flight list
// fetch, whether the trigger was a poll tick, a mutation's follow-up
// refresh, or a manual reload.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use super::snapshot::Snapshot;
use crate::error::SyncError;
use crate::poll::RefreshPhase;

pub(crate) struct SyncCell<T> {
    state: watch::Sender<Snapshot<T>>,
    /// Serializes fetches for this resource.
    gate: Mutex<()>,
}

impl<T: Clone> SyncCell<T> {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(Snapshot::default());
        Self {
            state,
            gate: Mutex::new(()),
        }
    }

    /// Current snapshot (cheap clone — items are shared).
    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.state.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.state.subscribe()
    }

    /// Run one full-replacement refresh cycle.
    ///
    /// On success the entire item list is replaced and `error` cleared;
    /// on failure the previous list is kept and `error` recorded. The
    /// busy flag matching `phase` is raised for the duration, and reset
    /// even if the caller's future is dropped mid-fetch.
    pub(crate) async fn sync_with<F, Fut>(
        &self,
        phase: RefreshPhase,
        fetch: F,
    ) -> Result<(), streamwatch_api::Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, streamwatch_api::Error>>,
    {
        let _gate = self.gate.lock().await;

        self.state.send_modify(|snap| match phase {
            RefreshPhase::Initial => snap.loading = true,
            RefreshPhase::Background => snap.refreshing = true,
        });
        let mut flags = FlagGuard {
            state: &self.state,
            armed: true,
        };

        match fetch().await {
            Ok(items) => {
                flags.armed = false;
                self.state.send_modify(|snap| {
                    snap.items = Arc::new(items);
                    snap.loading = false;
                    snap.refreshing = false;
                    snap.error = None;
                });
                Ok(())
            }
            Err(err) => {
                flags.armed = false;
                let descriptor = SyncError::from(&err);
                self.state.send_modify(|snap| {
                    snap.loading = false;
                    snap.refreshing = false;
                    snap.error = Some(descriptor);
                    // items untouched: stale-but-valid beats blank
                });
                Err(err)
            }
        }
    }

    /// Apply a local patch (optimistic removal, model attach/detach).
    pub(crate) fn patch(&self, apply: impl FnOnce(&mut Snapshot<T>)) {
        self.state.send_modify(apply);
    }
}

/// Clears the busy flags if a refresh future is dropped mid-fetch
/// (poller stopped while the request was outstanding). Items and error
/// stay exactly as they were.
struct FlagGuard<'a, T> {
    state: &'a watch::Sender<Snapshot<T>>,
    armed: bool,
}

impl<T> Drop for FlagGuard<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|snap| {
                snap.loading = false;
                snap.refreshing = false;
            });
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SyncError;

    fn remote_err() -> streamwatch_api::Error {
        streamwatch_api::Error::Remote {
            status: 500,
            message: "boom".into(),
        }
    }

    #[tokio::test]
    async fn success_replaces_items_and_clears_error() {
        let cell: SyncCell<u32> = SyncCell::new();

        cell.sync_with(RefreshPhase::Initial, || async { Err(remote_err()) })
            .await
            .unwrap_err();
        assert!(cell.snapshot().error.is_some());

        cell.sync_with(RefreshPhase::Background, || async { Ok(vec![1, 2, 3]) })
            .await
            .unwrap();

        let snap = cell.snapshot();
        assert_eq!(*snap.items, vec![1, 2, 3]);
        assert!(snap.error.is_none());
        assert!(!snap.is_busy());
    }

    #[tokio::test]
    async fn failure_keeps_previous_items_pointer() {
        let cell: SyncCell<u32> = SyncCell::new();
        cell.sync_with(RefreshPhase::Initial, || async { Ok(vec![7]) })
            .await
            .unwrap();

        let before = cell.snapshot().items;
        cell.sync_with(RefreshPhase::Background, || async { Err(remote_err()) })
            .await
            .unwrap_err();

        let snap = cell.snapshot();
        assert!(Arc::ptr_eq(&before, &snap.items), "items were replaced");
        assert_eq!(
            snap.error,
            Some(SyncError::Remote {
                status: 500,
                message: "boom".into()
            })
        );
    }

    #[tokio::test]
    async fn refresh_twice_with_same_payload_is_idempotent() {
        let cell: SyncCell<u32> = SyncCell::new();

        for _ in 0..2 {
            cell.sync_with(RefreshPhase::Background, || async { Ok(vec![4, 5]) })
                .await
                .unwrap();
        }

        assert_eq!(*cell.snapshot().items, vec![4, 5]);
    }

    #[tokio::test]
    async fn phase_maps_to_the_matching_flag() {
        let cell: SyncCell<u32> = SyncCell::new();

        let (observed_tx, observed_rx) = std::sync::mpsc::channel();
        let rx = cell.subscribe();
        cell.sync_with(RefreshPhase::Initial, || {
            let rx = rx.clone();
            let observed_tx = observed_tx.clone();
            async move {
                let snap = rx.borrow().clone();
                observed_tx.send((snap.loading, snap.refreshing)).unwrap();
                Ok(Vec::new())
            }
        })
        .await
        .unwrap();

        assert_eq!(observed_rx.recv().unwrap(), (true, false));

        cell.sync_with(RefreshPhase::Background, || {
            let rx = rx.clone();
            let observed_tx = observed_tx.clone();
            async move {
                let snap = rx.borrow().clone();
                observed_tx.send((snap.loading, snap.refreshing)).unwrap();
                Ok(Vec::new())
            }
        })
        .await
        .unwrap();

        assert_eq!(observed_rx.recv().unwrap(), (false, true));
        assert!(!cell.snapshot().is_busy());
    }

    #[tokio::test]
    async fn dropped_refresh_clears_busy_flags_only() {
        let cell: Arc<SyncCell<u32>> = Arc::new(SyncCell::new());
        cell.sync_with(RefreshPhase::Initial, || async { Ok(vec![9]) })
            .await
            .unwrap();
        let before = cell.snapshot().items;

        let gate = Arc::new(tokio::sync::Notify::new());
        let task = {
            let (cell, gate) = (cell.clone(), gate.clone());
            tokio::spawn(async move {
                cell.sync_with(RefreshPhase::Background, || async move {
                    gate.notified().await;
                    Ok(vec![1])
                })
                .await
            })
        };

        // Let the refresh raise its flag, then abort it mid-fetch
        tokio::task::yield_now().await;
        task.abort();
        let _ = task.await;

        let snap = cell.snapshot();
        assert!(!snap.is_busy(), "busy flag survived an aborted refresh");
        assert!(Arc::ptr_eq(&before, &snap.items));
        assert!(snap.error.is_none());
    }
}
