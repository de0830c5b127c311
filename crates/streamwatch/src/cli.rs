//! Clap derive structures for the `streamwatch` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// streamwatch -- dashboard CLI for video-processing streams
#[derive(Debug, Parser)]
#[command(
    name = "streamwatch",
    version,
    about = "Monitor video-processing streams from the command line",
    long_about = "A CLI dashboard for the streamwatch video-processing backend.\n\n\
        Lists streams and alerts, manages streams and their analysis\n\
        models, and follows backend state live in watch mode.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "STREAMWATCH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 's', env = "STREAMWATCH_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STREAMWATCH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "STREAMWATCH_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage video streams
    #[command(alias = "st")]
    Streams(StreamsArgs),

    /// Attach and detach analysis models
    #[command(alias = "m")]
    Models(ModelsArgs),

    /// View alerts raised by the backend
    #[command(alias = "al")]
    Alerts(AlertsArgs),

    /// Follow streams and alerts live until interrupted
    Watch(WatchArgs),

    /// Inspect the configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Streams ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StreamsArgs {
    #[command(subcommand)]
    pub command: StreamsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StreamsCommand {
    /// List configured streams
    #[command(alias = "ls")]
    List,

    /// Add a new stream
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Camera index, video file path, or image folder path
        #[arg(long)]
        source: String,

        /// Analysis model to attach (repeatable)
        #[arg(long = "model", value_name = "MODEL")]
        models: Vec<String>,
    },

    /// Remove a stream
    #[command(alias = "rm")]
    Remove {
        /// Stream id
        id: String,
    },

    /// Show per-model inference results for a stream
    Results {
        /// Stream id
        id: String,
    },
}

// ── Models ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelsCommand {
    /// List the known analysis models
    #[command(alias = "ls")]
    List,

    /// Attach a model to a stream
    Attach {
        /// Stream id
        stream_id: String,
        /// Model name (e.g. asset_detection)
        model: String,
    },

    /// Detach a model from a stream
    Detach {
        /// Stream id
        stream_id: String,
        /// Model name
        model: String,
    },
}

// ── Alerts ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AlertsArgs {
    #[command(subcommand)]
    pub command: AlertsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List alerts
    #[command(alias = "ls")]
    List {
        /// Show at most this many alerts (most recent last)
        #[arg(long)]
        limit: Option<usize>,
    },
}

// ── Watch ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Poll cadence for both resources (e.g. "2s", "500ms"); defaults
    /// to the profile's per-resource intervals
    #[arg(long, value_parser = humantime::parse_duration)]
    pub interval: Option<std::time::Duration>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a starter config file with a default profile
    Init {
        /// Backend base URL for the default profile
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        server: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
