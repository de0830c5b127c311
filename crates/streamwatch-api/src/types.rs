//! Wire types for the backend REST API.
//!
//! These mirror the JSON payloads exactly as the backend emits them.
//! Optional fields default rather than fail: the backend omits fields
//! freely and downstream consumers are expected to tolerate that.

use serde::{Deserialize, Serialize};

// ── Streams ─────────────────────────────────────────────────────────

/// Envelope of `GET /streams`.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamListResponse {
    /// Redundant with `streams.len()`; the list is authoritative.
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub streams: Vec<StreamRecord>,
}

/// A single stream as reported by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// `camera`, `video_file`, `image_folder` — passed through verbatim,
    /// interpretation happens in the domain layer.
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub frame_count: u64,
    /// Seconds since the backend started consuming the source.
    #[serde(default)]
    pub uptime: Option<f64>,
}

/// Request body of `POST /streams`.
#[derive(Debug, Clone, Serialize)]
pub struct NewStream {
    pub name: String,
    pub source: String,
    pub models: Vec<String>,
}

/// Response of `POST /streams`: the server-assigned id plus an ack message.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamCreated {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic ack payload (`DELETE /streams/{id}`, model attach/detach).
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

// ── Alerts ──────────────────────────────────────────────────────────

/// Envelope of `GET /alerts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertListResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub alerts: Vec<AlertRecord>,
}

/// A single alert. The backend guarantees no identity field; alerts are
/// an ordered sequence, not addressable entities.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    /// ISO-8601 string or epoch number — parsed downstream.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stream_id: Option<String>,
    /// Arbitrary structured payload, shown verbatim.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
