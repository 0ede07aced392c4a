//! Configuration CLI command handlers

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    let mut config = Config::load()?;
    let message = apply(&mut config, command)?;
    if message.changed {
        config.save()?;
    }
    println!("{}", message.text);
    Ok(())
}

/// Outcome of a config command
pub struct ConfigOutcome {
    /// Text printed to the user
    pub text: String,
    /// Whether the config must be written back
    pub changed: bool,
}

/// Apply a config command to an in-memory config
pub fn apply(config: &mut Config, command: ConfigCommand) -> Result<ConfigOutcome> {
    match command {
        ConfigCommand::Set { key, value } => {
            let text = match key {
                ConfigKey::DataFile => {
                    // Resolved against the current directory
                    let path = std::path::absolute(&value)?;
                    let text = format!("Default data file set to: {}", path.display());
                    config.data_file = Some(path);
                    text
                }
                ConfigKey::TickRate => {
                    config.set_tick_rate(&value)?;
                    format!("Tick rate set to: {} ms", config.tick_rate_ms)
                }
            };
            Ok(ConfigOutcome {
                text,
                changed: true,
            })
        }
        ConfigCommand::Get { key } => {
            let text = match key {
                ConfigKey::DataFile => match &config.data_file {
                    Some(path) => format!("Data file: {}", path.display()),
                    None => "Data file: Not configured".to_string(),
                },
                ConfigKey::TickRate => format!("Tick rate: {} ms", config.tick_rate_ms),
            };
            Ok(ConfigOutcome {
                text,
                changed: false,
            })
        }
        ConfigCommand::Remove { key } => {
            let defaults = Config::default();
            let text = match key {
                ConfigKey::DataFile => {
                    config.data_file = None;
                    "Default data file has been removed.".to_string()
                }
                ConfigKey::TickRate => {
                    config.tick_rate_ms = defaults.tick_rate_ms;
                    format!("Tick rate reset to default: {} ms", defaults.tick_rate_ms)
                }
            };
            Ok(ConfigOutcome {
                text,
                changed: true,
            })
        }
    }
}
