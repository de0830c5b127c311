//! Shared configuration for the streamwatch CLI.
//!
//! TOML profiles with an environment overlay, and translation to
//! `streamwatch_core::MonitorConfig`. The CLI adds flag-aware wrappers
//! on top; nothing here reads CLI arguments.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use streamwatch_core::{MonitorConfig, PollerConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named backend profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "http://127.0.0.1:5000").
    pub server: String,

    /// Seconds between stream-list polls.
    #[serde(default = "default_stream_interval")]
    pub stream_interval: u64,

    /// Seconds between alert-list polls.
    #[serde(default = "default_alert_interval")]
    pub alert_interval: u64,

    /// Override request timeout (seconds).
    pub timeout: Option<u64>,
}

fn default_stream_interval() -> u64 {
    5
}
fn default_alert_interval() -> u64 {
    1
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "streamwatch", "streamwatch").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("streamwatch");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a Config from an explicit file path + environment. The
/// `STREAMWATCH_` env overlay uses `_` as the nesting separator
/// (e.g. `STREAMWATCH_DEFAULTS_OUTPUT=json`).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("STREAMWATCH_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

/// Build a `MonitorConfig` from a profile — no CLI flag overrides.
pub fn profile_to_monitor_config(profile: &Profile) -> Result<MonitorConfig, ConfigError> {
    let base_url: url::Url = profile.server.parse().map_err(|_| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {}", profile.server),
    })?;

    let mut config = MonitorConfig::new(base_url);
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or_else(default_timeout));
    config.stream_poll = PollerConfig {
        interval: Duration::from_secs(profile.stream_interval.max(1)),
        immediate: true,
    };
    config.alert_poll = PollerConfig {
        interval: Duration::from_secs(profile.alert_interval.max(1)),
        immediate: true,
    };

    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "lab"

[defaults]
output = "json"

[profiles.lab]
server = "http://10.0.0.2:5000"
stream_interval = 2
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();

        assert_eq!(cfg.default_profile.as_deref(), Some("lab"));
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.defaults.timeout, 30);

        let lab = &cfg.profiles["lab"];
        assert_eq!(lab.server, "http://10.0.0.2:5000");
        assert_eq!(lab.stream_interval, 2);
        assert_eq!(lab.alert_interval, 1);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load_config_from(std::path::Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn profile_resolution_maps_intervals() {
        let profile = Profile {
            server: "http://127.0.0.1:5000".into(),
            stream_interval: 7,
            alert_interval: 3,
            timeout: Some(10),
        };

        let config = profile_to_monitor_config(&profile).unwrap();

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.stream_poll.interval, Duration::from_secs(7));
        assert_eq!(config.alert_poll.interval, Duration::from_secs(3));
        assert!(config.stream_poll.immediate);
    }

    #[test]
    fn bad_server_url_is_rejected() {
        let profile = Profile {
            server: "not a url".into(),
            stream_interval: 5,
            alert_interval: 1,
            timeout: None,
        };

        assert!(matches!(
            profile_to_monitor_config(&profile),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                server: "http://127.0.0.1:5000".into(),
                stream_interval: 5,
                alert_interval: 1,
                timeout: None,
            },
        );

        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.profiles["default"].server, "http://127.0.0.1:5000");
    }
}
