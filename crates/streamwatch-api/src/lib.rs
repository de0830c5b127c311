//! Async Rust client for the streamwatch video-processing backend.
//!
//! One operation per backend capability, all JSON REST under `/api/`:
//! list/create/delete streams, attach/detach analysis models, list
//! alerts, and fetch per-stream inference results. Failures surface as
//! a single [`Error`] value — non-2xx responses carry the backend's
//! best-effort error message, transport and parse failures keep their
//! own variants so callers can branch without string matching.
//!
//! The client is stateless between calls and cheap to clone; higher
//! layers (`streamwatch-core`) own all caching and synchronization.

mod client;
mod error;
pub mod types;

pub use client::ApiClient;
pub use error::Error;
