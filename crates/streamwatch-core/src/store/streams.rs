// ── Stream synchronization store ──

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use streamwatch_api::ApiClient;
use streamwatch_api::types::NewStream;

use super::cell::SyncCell;
use super::snapshot::Snapshot;
use crate::error::CoreError;
use crate::model::Stream;
use crate::poll::{Poller, PollerConfig, RefreshPhase};

/// Owns the authoritative local stream list and serializes it against
/// both periodic polls and user-initiated mutations.
///
/// Cheaply cloneable; all clones share one snapshot. The store is the
/// only component allowed to talk to the gateway for stream state —
/// consumers read snapshots and call the mutation methods.
#[derive(Clone)]
pub struct StreamStore {
    inner: Arc<Inner>,
}

struct Inner {
    client: ApiClient,
    cell: SyncCell<Stream>,
}

impl StreamStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                cell: SyncCell::new(),
            }),
        }
    }

    // ── Observation ─────────────────────────────────────────────────

    /// Current snapshot (cheap clone — the item list is shared).
    pub fn snapshot(&self) -> Snapshot<Stream> {
        self.inner.cell.snapshot()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Stream>> {
        self.inner.cell.subscribe()
    }

    // ── Refresh ─────────────────────────────────────────────────────

    /// Fetch the full stream list and replace the local one.
    ///
    /// Full-replacement semantics: a successful poll response is the
    /// complete authoritative list, so server-side deletions disappear
    /// locally without any diffing. On failure the previous list stays
    /// and the error lands both in the snapshot and the return value.
    pub async fn refresh(&self, phase: RefreshPhase) -> Result<(), CoreError> {
        let client = self.inner.client.clone();
        self.inner
            .cell
            .sync_with(phase, || async move {
                let resp = client.list_streams().await?;
                Ok(resp.streams.into_iter().map(Stream::from).collect())
            })
            .await
            .map_err(CoreError::from)
    }

    /// Spawn a poller driving [`refresh`](Self::refresh) on `config`'s
    /// cadence. Failures are recorded in the snapshot and logged; the
    /// schedule itself never stops on error.
    pub fn start_polling(&self, config: PollerConfig) -> Poller {
        let store = self.clone();
        Poller::start(config, move |phase| {
            let store = store.clone();
            async move {
                if let Err(e) = store.refresh(phase).await {
                    warn!(error = %e, "stream refresh failed");
                }
            }
        })
    }

    // ── Mutations ───────────────────────────────────────────────────
    //
    // Input validation (non-empty name/source, known model names) is
    // the caller's job; the store passes requests through and owns only
    // the reconciliation of results into the snapshot.

    /// Create a stream, then refresh so the server-assigned fields
    /// (id, initial `active` / `frame_count`) appear right away.
    ///
    /// Returns the new stream's id. A failed create leaves the local
    /// list unchanged and is returned to the caller — never folded into
    /// the snapshot's poll-error field.
    pub async fn add(&self, spec: NewStream) -> Result<String, CoreError> {
        let created = self.inner.client.create_stream(&spec).await?;
        debug!(id = %created.id, "stream created");

        // Reconciliation refresh; its failure doesn't undo the add.
        if let Err(e) = self.refresh(RefreshPhase::Background).await {
            warn!(error = %e, "post-add refresh failed");
        }
        Ok(created.id)
    }

    /// Delete a stream, remove it locally without waiting for the next
    /// poll, then refresh to reconcile concurrent server-side changes.
    ///
    /// Removing an id already absent locally is a local no-op, but the
    /// network call still runs and its failure (e.g. "not found") is
    /// surfaced rather than suppressed.
    pub async fn remove(&self, stream_id: &str) -> Result<(), CoreError> {
        self.inner.client.delete_stream(stream_id).await?;

        self.inner.cell.patch(|snap| {
            if snap.items.iter().any(|s| s.id == stream_id) {
                let kept: Vec<Stream> = snap
                    .items
                    .iter()
                    .filter(|s| s.id != stream_id)
                    .cloned()
                    .collect();
                snap.items = Arc::new(kept);
            }
        });

        if let Err(e) = self.refresh(RefreshPhase::Background).await {
            warn!(error = %e, "post-remove refresh failed");
        }
        Ok(())
    }

    /// Attach an analysis model, patching only the affected stream's
    /// model set locally. No follow-up refresh: the patch is cheap and
    /// the next scheduled poll's full replacement is free to overwrite
    /// it with the server-confirmed state.
    pub async fn attach_model(&self, stream_id: &str, model: &str) -> Result<(), CoreError> {
        self.inner.client.attach_model(stream_id, model).await?;
        self.patch_models(stream_id, |models| {
            if !models.iter().any(|m| m == model) {
                models.push(model.to_owned());
            }
        });
        Ok(())
    }

    /// Detach an analysis model; the local mirror of [`attach_model`](Self::attach_model).
    pub async fn detach_model(&self, stream_id: &str, model: &str) -> Result<(), CoreError> {
        self.inner.client.detach_model(stream_id, model).await?;
        self.patch_models(stream_id, |models| {
            models.retain(|m| m != model);
        });
        Ok(())
    }

    /// Rebuild the item list with one stream's model set modified,
    /// leaving every other stream untouched.
    fn patch_models(&self, stream_id: &str, apply: impl FnOnce(&mut Vec<String>)) {
        self.inner.cell.patch(|snap| {
            if !snap.items.iter().any(|s| s.id == stream_id) {
                return;
            }
            let mut items: Vec<Stream> = snap.items.as_ref().clone();
            if let Some(stream) = items.iter_mut().find(|s| s.id == stream_id) {
                apply(&mut stream.models);
            }
            snap.items = Arc::new(items);
        });
    }

    // ── Results ─────────────────────────────────────────────────────

    /// Per-model inference results for one stream. Pass-through to the
    /// gateway (no caching — results are request/response, not polled
    /// state), kept on the store so consumers never hold a raw client.
    pub async fn results(&self, stream_id: &str) -> Result<serde_json::Value, CoreError> {
        Ok(self.inner.client.stream_results(stream_id).await?)
    }
}
