// ── Monitor facade ──
//
// Wires the gateway client, both stores, and their pollers together
// for hosts that want the whole dashboard state kept fresh (the CLI's
// watch mode). Pages that only need one resource can instead construct
// a single store and poller directly — nothing here is a singleton.

use std::sync::Mutex;

use tracing::info;

use streamwatch_api::ApiClient;

use crate::config::MonitorConfig;
use crate::error::CoreError;
use crate::poll::Poller;
use crate::store::{AlertStore, StreamStore};

/// One backend connection with both resources under management.
pub struct Monitor {
    config: MonitorConfig,
    streams: StreamStore,
    alerts: AlertStore,
    pollers: Mutex<Vec<Poller>>,
}

impl Monitor {
    /// Build the client and stores. Does NOT start polling — call
    /// [`start()`](Self::start), or drive the stores manually.
    pub fn new(config: MonitorConfig) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Config {
                message: format!("HTTP client setup failed: {e}"),
            })?;
        let client = ApiClient::from_reqwest(config.base_url.as_str(), http)?;

        Ok(Self {
            streams: StreamStore::new(client.clone()),
            alerts: AlertStore::new(client),
            pollers: Mutex::new(Vec::new()),
            config,
        })
    }

    /// Spawn both pollers on the configured cadences. Idempotent-ish:
    /// calling twice would double-poll, so don't.
    pub fn start(&self) {
        let mut pollers = self.pollers.lock().unwrap_or_else(|e| e.into_inner());
        pollers.push(self.streams.start_polling(self.config.stream_poll));
        pollers.push(self.alerts.start_polling(self.config.alert_poll));
        info!(
            stream_interval = ?self.config.stream_poll.interval,
            alert_interval = ?self.config.alert_poll.interval,
            "monitor polling started"
        );
    }

    /// Stop all pollers and wait for their loops to finish. In-flight
    /// fetches are discarded; snapshots stay at their last value.
    pub async fn shutdown(&self) {
        let drained: Vec<Poller> = {
            let mut pollers = self.pollers.lock().unwrap_or_else(|e| e.into_inner());
            pollers.drain(..).collect()
        };
        for poller in drained {
            poller.shutdown().await;
        }
        info!("monitor polling stopped");
    }

    pub fn streams(&self) -> &StreamStore {
        &self.streams
    }

    pub fn alerts(&self) -> &AlertStore {
        &self.alerts
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
