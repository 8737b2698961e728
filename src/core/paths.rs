use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base scriptsmith config directory (~/.config/scriptsmith/, %APPDATA%\scriptsmith on Windows)
pub fn scriptsmith() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("scriptsmith"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("scriptsmith"))
    }
}

/// Global scriptsmith.json config file path
pub fn scriptsmith_json() -> Result<PathBuf> {
    Ok(scriptsmith()?.join("scriptsmith.json"))
}
