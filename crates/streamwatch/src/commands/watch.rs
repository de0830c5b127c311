//! Live watch mode: keep both stores polling and print a summary line
//! whenever the settled state changes.

use owo_colors::OwoColorize;

use streamwatch_core::{Monitor, Snapshot};

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    monitor: &Monitor,
    _args: WatchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut stream_rx = monitor.streams().subscribe();
    let mut alert_rx = monitor.alerts().subscribe();

    monitor.start();
    if !global.quiet {
        eprintln!(
            "Watching {} (Ctrl-C to stop)",
            monitor.config().base_url
        );
    }

    let color = output::should_color(&global.color);
    let mut last_line = String::new();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = stream_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            changed = alert_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }

        let streams = stream_rx.borrow_and_update().clone();
        let alerts = alert_rx.borrow_and_update().clone();

        // Only report settled states; mid-refresh flag flips are noise.
        if streams.is_busy() || alerts.is_busy() {
            continue;
        }

        let line = summary_line(&streams, &alerts, color);
        if line != last_line {
            println!("{}  {line}", chrono::Local::now().format("%H:%M:%S"));
            last_line = line;
        }
    }

    monitor.shutdown().await;
    if !global.quiet {
        eprintln!("Stopped");
    }
    Ok(())
}

fn summary_line(
    streams: &Snapshot<streamwatch_core::Stream>,
    alerts: &Snapshot<streamwatch_core::Alert>,
    color: bool,
) -> String {
    let active = streams.items.iter().filter(|s| s.active).count();
    let mut line = format!(
        "streams: {} ({active} active)  alerts: {}",
        streams.items.len(),
        alerts.items.len()
    );

    for (label, error) in [("streams", &streams.error), ("alerts", &alerts.error)] {
        if let Some(err) = error {
            let note = format!("  [{label}: {err}]");
            if color {
                line.push_str(&note.red().to_string());
            } else {
                line.push_str(&note);
            }
        }
    }
    line
}
