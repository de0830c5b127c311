//! Shared helpers for command handlers.

use std::io::{self, IsTerminal, Write};
use std::str::FromStr;

use streamwatch_core::AnalysisModel;

use crate::error::CliError;

/// Ask for confirmation before a destructive operation.
///
/// `--yes` skips the prompt; a non-interactive stdin without `--yes`
/// is an error rather than a hang.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, CliError> {
    if yes {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: prompt.into(),
        });
    }

    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "YES"))
}

/// Reject model names outside the known vocabulary before they reach
/// the network. The stores themselves accept any string — validation
/// is the caller's job.
pub fn validate_model(name: &str) -> Result<(), CliError> {
    if AnalysisModel::from_str(name).is_ok() {
        Ok(())
    } else {
        Err(CliError::Validation {
            field: "model".into(),
            reason: format!(
                "unknown model '{name}' (known: {})",
                AnalysisModel::known_names().join(", ")
            ),
        })
    }
}
