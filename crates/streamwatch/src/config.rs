//! CLI configuration — thin wrapper around `streamwatch_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--server, --timeout, --profile).

use std::time::Duration;

use streamwatch_core::MonitorConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use streamwatch_config::{Config, config_path, load_config_or_default, save_config};

/// The backend's conventional development address, used when neither a
/// profile nor a --server flag names one.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `MonitorConfig` from the config file, profile, and CLI
/// overrides. Flags beat profile values beat built-in defaults.
pub fn resolve_monitor_config(global: &GlobalOpts) -> Result<MonitorConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let mut monitor = match cfg.profiles.get(&profile_name) {
        Some(profile) => streamwatch_config::profile_to_monitor_config(profile)?,
        None => {
            // No profile — server flag or the conventional local address
            let url_str = global.server.as_deref().unwrap_or(DEFAULT_SERVER);
            let base_url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
                field: "server".into(),
                reason: format!("invalid URL: {url_str}"),
            })?;
            MonitorConfig::new(base_url)
        }
    };

    // CLI flag overrides
    if let Some(ref url_str) = global.server {
        monitor.base_url = url_str.parse().map_err(|_| CliError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {url_str}"),
        })?;
    }
    monitor.timeout = Duration::from_secs(global.timeout);

    Ok(monitor)
}
