// ── Alert domain type ──
//
// Alerts carry no identity: they are an ordered sequence replaced
// wholesale on every poll, never addressed or mutated individually.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use streamwatch_api::types::AlertRecord;

/// Severity assigned when the backend omits one.
pub const DEFAULT_LEVEL: &str = "info";

/// An alert raised by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Best-effort parse of the wire timestamp; `None` when absent or
    /// unparseable.
    pub timestamp: Option<DateTime<Utc>>,
    /// Severity string, `"info"` when the backend omits it.
    pub level: String,
    pub message: String,
    /// Weak reference — the stream may no longer exist.
    pub stream_id: Option<String>,
    /// Opaque structured payload, shown verbatim.
    pub details: Option<Value>,
}

impl From<AlertRecord> for Alert {
    fn from(rec: AlertRecord) -> Self {
        Self {
            timestamp: rec.timestamp.as_ref().and_then(parse_timestamp),
            level: rec.level.unwrap_or_else(|| DEFAULT_LEVEL.to_owned()),
            message: rec.message.unwrap_or_default(),
            stream_id: rec.stream_id,
            details: rec.details,
        }
    }
}

/// Parse whatever the backend put in the timestamp field.
///
/// Accepts RFC 3339, the zone-less ISO form Python's `isoformat()`
/// emits, and epoch numbers (seconds, or milliseconds above 10^12).
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|dt| dt.and_utc())
                    .ok()
            }),
        Value::Number(n) => {
            let epoch = n.as_f64()?;
            #[allow(clippy::cast_possible_truncation)]
            let (secs, millis) = if epoch >= 1e12 {
                ((epoch / 1000.0) as i64, (epoch % 1000.0) as u32)
            } else {
                (epoch as i64, 0)
            };
            DateTime::from_timestamp(secs, millis * 1_000_000)
        }
        _ => None,
    }
}
