//! Analysis-model command handlers.

use tabled::Tabled;

use streamwatch_core::{AnalysisModel, Monitor};

use crate::cli::{GlobalOpts, ModelsArgs, ModelsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled, serde::Serialize)]
struct ModelRow {
    #[tabled(rename = "Model")]
    name: String,
}

pub async fn handle(
    monitor: &Monitor,
    args: ModelsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ModelsCommand::List => {
            let rows: Vec<ModelRow> = AnalysisModel::known_names()
                .iter()
                .map(|name| ModelRow {
                    name: (*name).to_owned(),
                })
                .collect();
            let out = output::render_list(
                &global.output,
                &rows,
                |r| ModelRow {
                    name: r.name.clone(),
                },
                |r| r.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ModelsCommand::Attach { stream_id, model } => {
            util::validate_model(&model)?;
            monitor.streams().attach_model(&stream_id, &model).await?;
            if !global.quiet {
                eprintln!("Model {model} attached to stream {stream_id}");
            }
            Ok(())
        }

        ModelsCommand::Detach { stream_id, model } => {
            util::validate_model(&model)?;
            monitor.streams().detach_model(&stream_id, &model).await?;
            if !global.quiet {
                eprintln!("Model {model} detached from stream {stream_id}");
            }
            Ok(())
        }
    }
}
