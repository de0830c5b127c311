//! Data-synchronization layer between `streamwatch-api` and UI consumers.
//!
//! The backend owns all business logic (ingestion, inference,
//! alerting); this crate keeps a faithful local mirror of its state and
//! layers recoverable mutations on top:
//!
//! - **[`Poller`]** — fixed-interval driver for a fetch operation.
//!   Guarantees at most one in-flight fetch per poller (overdue ticks
//!   are skipped, never queued), keeps polling through failures, and on
//!   [`stop()`](Poller::stop) discards any in-flight result.
//!
//! - **[`StreamStore`]** — canonical local stream list. Polls apply
//!   full-replacement semantics; `add` / `remove` / `attach_model` /
//!   `detach_model` reconcile optimistically and surface their own
//!   errors to the caller, distinct from the snapshot's poll-error
//!   field.
//!
//! - **[`AlertStore`]** — read-only replace-only projection of the
//!   backend's alert sequence, on its own cadence.
//!
//! - **[`Snapshot`]** — the observable `{items, loading, refreshing,
//!   error}` tuple each store broadcasts through a `watch` channel. A
//!   failed fetch never blanks `items`; stale data with an error flag
//!   beats an empty view.
//!
//! - **[`Monitor`]** — convenience facade wiring one gateway client,
//!   both stores, and both pollers from a [`MonitorConfig`].

pub mod config;
pub mod error;
pub mod model;
pub mod monitor;
pub mod poll;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::MonitorConfig;
pub use error::{CoreError, SyncError};
pub use monitor::Monitor;
pub use poll::{Poller, PollerConfig, RefreshPhase};
pub use store::{AlertStore, Snapshot, StreamStore};

// Re-export model types at the crate root for ergonomics.
pub use model::{Alert, AnalysisModel, SourceType, Stream};

// The gateway's request type appears in `StreamStore::add`.
pub use streamwatch_api::types::NewStream;
