//! Alert command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use streamwatch_core::{Alert, Monitor, RefreshPhase};

use crate::cli::{AlertsArgs, AlertsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Stream")]
    stream: String,
    #[tabled(rename = "Message")]
    message: String,
}

fn to_row(alert: &Alert, color: bool) -> AlertRow {
    AlertRow {
        time: alert
            .timestamp
            .map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        level: paint_level(&alert.level, color),
        stream: alert.stream_id.clone().unwrap_or_else(|| "-".into()),
        message: alert.message.clone(),
    }
}

/// Color the severity column: errors red, warnings yellow.
fn paint_level(level: &str, color: bool) -> String {
    if !color {
        return level.to_owned();
    }
    match level {
        "error" | "critical" => level.red().to_string(),
        "warning" => level.yellow().to_string(),
        _ => level.to_owned(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    monitor: &Monitor,
    args: AlertsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let store = monitor.alerts();

    match args.command {
        AlertsCommand::List { limit } => {
            store.refresh(RefreshPhase::Initial).await?;
            let snap = store.snapshot();

            let shown: Vec<Alert> = match limit {
                Some(n) => snap.items.iter().take(n).cloned().collect(),
                None => snap.items.as_ref().clone(),
            };

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &shown,
                |a| to_row(a, color),
                |a| a.message.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
