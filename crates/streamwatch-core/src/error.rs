// ── Core error types ──
//
// User-facing errors from streamwatch-core. Consumers never see raw
// reqwest or serde failures — the `From<streamwatch_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.
//
// Two distinct surfaces, per the propagation policy:
// - `CoreError`: returned from mutation operations (add/remove/attach/
//   detach), so the caller can report "the thing you just did failed".
// - `SyncError`: a cloneable descriptor recorded inside a snapshot when
//   a background refresh fails. Non-fatal, local to one store.

use thiserror::Error;

/// Unified error type for store mutations and lifecycle operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot reach backend: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Backend error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed backend response: {message}")]
    MalformedResponse { message: String },

    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` if the backend reported the target as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

impl From<streamwatch_api::Error> for CoreError {
    fn from(err: streamwatch_api::Error) -> Self {
        match err {
            streamwatch_api::Error::Transport(e) => Self::ConnectionFailed {
                reason: e.to_string(),
            },
            streamwatch_api::Error::InvalidUrl(e) => Self::Config {
                message: format!("Invalid URL: {e}"),
            },
            streamwatch_api::Error::Remote { status, message } => Self::Api { status, message },
            streamwatch_api::Error::Deserialization { message, body: _ } => {
                Self::MalformedResponse { message }
            }
        }
    }
}

// ── Snapshot error descriptor ────────────────────────────────────────

/// A cheap, cloneable projection of a fetch failure, carried inside
/// [`Snapshot::error`](crate::store::Snapshot). Cloneable because
/// snapshots are broadcast through `watch` channels; the underlying
/// `reqwest::Error` is not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Backend unreachable (connection refused, DNS failure, timeout).
    #[error("backend unreachable: {0}")]
    Transport(String),

    /// Non-2xx response with a best-effort message.
    #[error("backend error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    /// Response body did not parse as the expected structure.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<&streamwatch_api::Error> for SyncError {
    fn from(err: &streamwatch_api::Error) -> Self {
        match err {
            streamwatch_api::Error::Transport(e) => Self::Transport(e.to_string()),
            streamwatch_api::Error::InvalidUrl(e) => Self::Transport(e.to_string()),
            streamwatch_api::Error::Remote { status, message } => Self::Remote {
                status: *status,
                message: message.clone(),
            },
            streamwatch_api::Error::Deserialization { message, .. } => {
                Self::Malformed(message.clone())
            }
        }
    }
}
