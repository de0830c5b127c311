//! Stream command handlers.

use tabled::Tabled;

use streamwatch_core::{Monitor, NewStream, RefreshPhase, SourceType, Stream};

use crate::cli::{GlobalOpts, StreamsArgs, StreamsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct StreamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Type")]
    source_type: String,
    #[tabled(rename = "Models")]
    models: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Frames")]
    frames: String,
}

impl From<&Stream> for StreamRow {
    fn from(s: &Stream) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            source: s.source.clone(),
            source_type: s.source_type.to_string(),
            models: if s.models.is_empty() {
                "-".into()
            } else {
                s.models.join(", ")
            },
            active: if s.active { "yes".into() } else { "no".into() },
            frames: s.frame_count.to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    monitor: &Monitor,
    args: StreamsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let store = monitor.streams();

    match args.command {
        StreamsCommand::List => {
            store.refresh(RefreshPhase::Initial).await?;
            let snap = store.snapshot();
            let out = output::render_list(
                &global.output,
                &snap.items,
                |s| StreamRow::from(s),
                |s| s.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StreamsCommand::Add {
            name,
            source,
            models,
        } => {
            if name.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "name".into(),
                    reason: "must not be empty".into(),
                });
            }
            if source.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "source".into(),
                    reason: "must not be empty".into(),
                });
            }
            for model in &models {
                util::validate_model(model)?;
            }

            let inferred = SourceType::infer(&source);
            let id = store
                .add(NewStream {
                    name,
                    source,
                    models,
                })
                .await?;

            if !global.quiet {
                eprintln!("Stream {id} added ({inferred} source)");
            }
            Ok(())
        }

        StreamsCommand::Remove { id } => {
            if !util::confirm(&format!("Remove stream '{id}'?"), global.yes)? {
                return Ok(());
            }
            store.remove(&id).await?;
            if !global.quiet {
                eprintln!("Stream removed");
            }
            Ok(())
        }

        StreamsCommand::Results { id } => {
            let results = store.results(&id).await?;
            let out = output::render_single(
                &global.output,
                &results,
                |v| output::render_json_pretty(v),
                |_| id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
