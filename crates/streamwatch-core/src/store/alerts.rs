// ── Alert synchronization store ──
//
// Read-only twin of the stream store: same polling discipline, no
// mutations. Alerts have no identity, so merging is never attempted —
// every successful poll replaces the whole list. If the backend emits
// two identical-looking alerts as distinct events, they simply both
// appear; no dedup key is guessed.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use streamwatch_api::ApiClient;

use super::cell::SyncCell;
use super::snapshot::Snapshot;
use crate::error::CoreError;
use crate::model::Alert;
use crate::poll::{Poller, PollerConfig, RefreshPhase};

/// Owns the local alert list.
#[derive(Clone)]
pub struct AlertStore {
    inner: Arc<Inner>,
}

struct Inner {
    client: ApiClient,
    cell: SyncCell<Alert>,
}

impl AlertStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                cell: SyncCell::new(),
            }),
        }
    }

    /// Current snapshot (cheap clone — the item list is shared).
    pub fn snapshot(&self) -> Snapshot<Alert> {
        self.inner.cell.snapshot()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Alert>> {
        self.inner.cell.subscribe()
    }

    /// Fetch the full alert list and replace the local one; on failure
    /// the previous list stays and the error is recorded.
    pub async fn refresh(&self, phase: RefreshPhase) -> Result<(), CoreError> {
        let client = self.inner.client.clone();
        self.inner
            .cell
            .sync_with(phase, || async move {
                let resp = client.list_alerts().await?;
                Ok(resp.alerts.into_iter().map(Alert::from).collect())
            })
            .await
            .map_err(CoreError::from)
    }

    /// Spawn a poller driving [`refresh`](Self::refresh) on `config`'s cadence.
    pub fn start_polling(&self, config: PollerConfig) -> Poller {
        let store = self.clone();
        Poller::start(config, move |phase| {
            let store = store.clone();
            async move {
                if let Err(e) = store.refresh(phase).await {
                    warn!(error = %e, "alert refresh failed");
                }
            }
        })
    }
}
