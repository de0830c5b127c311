// ── Core configuration ──

use std::time::Duration;

use url::Url;

use crate::poll::PollerConfig;

/// Default cadences, matching what the dashboard UI historically used:
/// streams refresh every 5 s, alerts every second.
pub const DEFAULT_STREAM_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_ALERT_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a [`Monitor`](crate::Monitor) needs: where the backend
/// lives and how often each resource is polled. Cadences are explicit
/// values, not hidden constants, so tests can run with millisecond
/// intervals.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Backend base URL; the `/api/` prefix is appended automatically.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    pub stream_poll: PollerConfig,
    pub alert_poll: PollerConfig,
}

impl MonitorConfig {
    /// Config with the default cadences for a backend at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            stream_poll: PollerConfig {
                interval: DEFAULT_STREAM_INTERVAL,
                immediate: true,
            },
            alert_poll: PollerConfig {
                interval: DEFAULT_ALERT_INTERVAL,
                immediate: true,
            },
        }
    }
}
