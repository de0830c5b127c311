//! Command handlers, one module per top-level subcommand.

pub mod alerts;
pub mod config_cmd;
pub mod models;
pub mod streams;
pub mod util;
pub mod watch;

use streamwatch_core::Monitor;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(cmd: Command, monitor: &Monitor, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Streams(args) => streams::handle(monitor, args, global).await,
        Command::Models(args) => models::handle(monitor, args, global).await,
        Command::Alerts(args) => alerts::handle(monitor, args, global).await,
        Command::Watch(args) => watch::handle(monitor, args, global).await,

        // Handled in main before a Monitor exists
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
