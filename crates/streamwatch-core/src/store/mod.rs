//! Synchronization stores: the canonical in-memory view of backend state.
//!
//! Each store owns one resource's [`Snapshot`] and is its only writer.
//! Polls apply full-replacement semantics (a successful list fetch is
//! authoritative); mutations layer optimistic local patches on top that
//! the next poll is always free to overwrite. A failed fetch never
//! touches the item list — stale data beats a blank view.

mod alerts;
mod cell;
mod snapshot;
mod streams;

pub use alerts::AlertStore;
pub use snapshot::Snapshot;
pub use streams::StreamStore;
