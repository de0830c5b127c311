//! Configuration inspection commands (no backend connection needed).

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let rendered = toml::to_string_pretty(&cfg).map_err(|e| CliError::Config {
                message: e.to_string(),
            })?;
            print!("{rendered}");
            Ok(())
        }

        ConfigCommand::Init { server } => {
            let path = config::config_path();
            if path.exists() {
                return Err(CliError::Config {
                    message: format!("config already exists at {}", path.display()),
                });
            }

            let mut cfg = config::Config::default();
            cfg.profiles.insert(
                "default".into(),
                streamwatch_config::Profile {
                    server,
                    stream_interval: 5,
                    alert_interval: 1,
                    timeout: None,
                },
            );
            config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}
