use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use scriptsmith::defaults::{self, ConfigKey, ScriptsmithConfig};
use scriptsmith::log_status;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display the effective configuration
    Show {
        /// Show only built-in defaults (ignore scriptsmith.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set one configuration value
    Set {
        /// dialect, export.output_dir, export.overwrite or export.executable
        key: String,
        value: String,
    },
    /// Revert one configuration value to its built-in default
    Remove { key: String },
    /// Delete scriptsmith.json
    Reset,
    /// Show the path to scriptsmith.json
    Path,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum ConfigOutput {
    #[serde(rename = "config.show")]
    Show {
        builtin: bool,
        config: ScriptsmithConfig,
    },

    #[serde(rename = "config.set")]
    Set {
        key: &'static str,
        value: Value,
        config: ScriptsmithConfig,
    },

    #[serde(rename = "config.remove")]
    Remove {
        key: &'static str,
        value: Value,
        config: ScriptsmithConfig,
    },

    #[serde(rename = "config.reset")]
    Reset {
        path: String,
        deleted: bool,
        config: ScriptsmithConfig,
    },

    #[serde(rename = "config.path")]
    Path { path: String, exists: bool },
}

pub fn run(args: ConfigArgs) -> CmdResult<ConfigOutput> {
    let output = match args.command {
        ConfigCommand::Show { builtin } => {
            let config = if builtin {
                ScriptsmithConfig::default()
            } else {
                defaults::load_config()
            };
            ConfigOutput::Show { builtin, config }
        }
        ConfigCommand::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            let config = defaults::update_defaults(|d| d.set(key, &value))?;
            log_status!("config", "Set {}", key);
            ConfigOutput::Set {
                key: key.as_str(),
                value: config.defaults.get(key),
                config,
            }
        }
        ConfigCommand::Remove { key } => {
            let key: ConfigKey = key.parse()?;
            let config = defaults::update_defaults(|d| {
                d.unset(key);
                Ok(())
            })?;
            ConfigOutput::Remove {
                key: key.as_str(),
                value: config.defaults.get(key),
                config,
            }
        }
        ConfigCommand::Reset => ConfigOutput::Reset {
            deleted: defaults::reset_config()?,
            path: defaults::config_path()?,
            config: ScriptsmithConfig::default(),
        },
        ConfigCommand::Path => ConfigOutput::Path {
            path: defaults::config_path()?,
            exists: defaults::config_exists(),
        },
    };

    Ok((output, 0))
}
