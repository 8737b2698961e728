use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::str::FromStr;

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::{io, json, paths};

/// Root configuration structure for scriptsmith.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScriptsmithConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via scriptsmith.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Defaults {
    /// Dialect for newly created documents
    #[serde(default)]
    pub dialect: Dialect,

    #[serde(default = "default_export")]
    pub export: ExportConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            export: default_export(),
        }
    }
}

/// Configuration for export operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Replace an existing script.sh/script.ps1 without --force
    #[serde(default)]
    pub overwrite: bool,

    /// Mark exported shell scripts executable (Unix only)
    #[serde(default = "default_executable")]
    pub executable: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        default_export()
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_export() -> ExportConfig {
    ExportConfig {
        output_dir: default_output_dir(),
        overwrite: false,
        executable: default_executable(),
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_executable() -> bool {
    true
}

// =============================================================================
// Typed keys
// =============================================================================

/// A settable entry of scriptsmith.json, addressed by its dotted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Dialect,
    OutputDir,
    Overwrite,
    Executable,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Dialect,
        ConfigKey::OutputDir,
        ConfigKey::Overwrite,
        ConfigKey::Executable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Dialect => "dialect",
            ConfigKey::OutputDir => "export.output_dir",
            ConfigKey::Overwrite => "export.overwrite",
            ConfigKey::Executable => "export.executable",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| {
                Error::validation_invalid_argument(
                    "key",
                    format!("Unknown config key '{}'", key),
                    None,
                    Some(ConfigKey::ALL.iter().map(|k| k.to_string()).collect()),
                )
            })
    }
}

impl Defaults {
    /// Current value stored under `key`.
    pub fn get(&self, key: ConfigKey) -> Value {
        match key {
            ConfigKey::Dialect => Value::from(self.dialect.as_str()),
            ConfigKey::OutputDir => Value::from(self.export.output_dir.as_str()),
            ConfigKey::Overwrite => Value::from(self.export.overwrite),
            ConfigKey::Executable => Value::from(self.export.executable),
        }
    }

    /// Parse `raw` as the value type of `key` and store it.
    pub fn set(&mut self, key: ConfigKey, raw: &str) -> Result<()> {
        let invalid = |problem: &str| {
            Error::config_invalid_value(key.as_str(), Some(raw.to_string()), problem)
        };

        match key {
            ConfigKey::Dialect => {
                self.dialect = raw
                    .parse::<Dialect>()
                    .map_err(|_| invalid("Expected shell or powershell"))?;
            }
            ConfigKey::OutputDir => {
                if raw.trim().is_empty() {
                    return Err(invalid("Output directory cannot be empty"));
                }
                self.export.output_dir = raw.to_string();
            }
            ConfigKey::Overwrite => {
                self.export.overwrite =
                    parse_flag(raw).ok_or_else(|| invalid("Expected true or false"))?;
            }
            ConfigKey::Executable => {
                self.export.executable =
                    parse_flag(raw).ok_or_else(|| invalid("Expected true or false"))?;
            }
        }
        Ok(())
    }

    /// Restore `key` to its built-in value.
    pub fn unset(&mut self, key: ConfigKey) {
        let builtin = builtin_defaults();
        match key {
            ConfigKey::Dialect => self.dialect = builtin.dialect,
            ConfigKey::OutputDir => self.export.output_dir = builtin.export.output_dir,
            ConfigKey::Overwrite => self.export.overwrite = builtin.export.overwrite,
            ConfigKey::Executable => self.export.executable = builtin.export.executable,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If scriptsmith.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full scriptsmith.json config, falling back to defaults on any error.
pub fn load_config() -> ScriptsmithConfig {
    read_config_file().ok().flatten().unwrap_or_default()
}

fn read_config_file() -> Result<Option<ScriptsmithConfig>> {
    let path = paths::scriptsmith_json()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = io::read_file(&path, "read scriptsmith.json")?;
    json::from_str(&content).map(Some)
}

/// Load the config, apply `edit` to its defaults, and save the result.
pub fn update_defaults<F>(edit: F) -> Result<ScriptsmithConfig>
where
    F: FnOnce(&mut Defaults) -> Result<()>,
{
    let mut config = load_config();
    edit(&mut config.defaults)?;
    save_config(&config)?;
    Ok(config)
}

/// Save config to scriptsmith.json file (creates if missing).
pub fn save_config(config: &ScriptsmithConfig) -> Result<()> {
    let path = paths::scriptsmith_json()?;

    if let Some(parent) = path.parent() {
        io::ensure_dir(parent)?;
    }

    let content = json::to_string_pretty(config)?;
    io::write_file_atomic(&path, &content, "write scriptsmith.json")
}

/// Check if scriptsmith.json file exists
pub fn config_exists() -> bool {
    paths::scriptsmith_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete scriptsmith.json file (reset to defaults)
pub fn reset_config() -> Result<bool> {
    let path = paths::scriptsmith_json()?;

    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(&path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
    })?;
    Ok(true)
}

/// Get the path to scriptsmith.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::scriptsmith_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
