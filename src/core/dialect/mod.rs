//! Target script dialects.
//!
//! Every dialect-specific decision (comment syntax, snippet set, menu shape,
//! export file name) is answered by a [`DialectSyntax`] implementation.
//! [`Dialect::syntax`] is the single place that maps the enum onto one.

mod bash;
mod powershell;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::menu::MenuItem;
use crate::snippets::Snippet;

pub use bash::Bash;
pub use powershell::PowerShell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "sh", alias = "bash")]
    Shell,
    #[serde(alias = "ps1", alias = "pwsh")]
    PowerShell,
}

/// Generation strategy for one dialect.
pub trait DialectSyntax: Sync {
    /// Human-facing language name.
    fn name(&self) -> &'static str;

    /// Marker that starts a single-line comment.
    fn comment_marker(&self) -> &'static str {
        "#"
    }

    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// Built-in snippets, in display order.
    fn snippets(&self) -> &'static [Snippet];

    /// Render the display routine, dispatch routine and driving loop.
    /// Callers guarantee `items` is non-empty.
    fn render_menu(&self, items: &[MenuItem]) -> String;

    fn export_file_name(&self) -> String {
        format!("script.{}", self.extension())
    }
}

static BASH: Bash = Bash;
static POWERSHELL: PowerShell = PowerShell;

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Shell, Dialect::PowerShell];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Shell => "shell",
            Dialect::PowerShell => "powershell",
        }
    }

    pub fn syntax(&self) -> &'static dyn DialectSyntax {
        match self {
            Dialect::Shell => &BASH,
            Dialect::PowerShell => &POWERSHELL,
        }
    }

    /// Human-readable language name, e.g. "PowerShell".
    pub fn name(&self) -> &'static str {
        self.syntax().name()
    }

    pub fn comment_marker(&self) -> &'static str {
        self.syntax().comment_marker()
    }

    pub fn export_file_name(&self) -> String {
        self.syntax().export_file_name()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shell" | "sh" | "bash" => Ok(Dialect::Shell),
            "powershell" | "ps1" | "pwsh" => Ok(Dialect::PowerShell),
            other => Err(Error::validation_invalid_argument(
                "dialect",
                format!("Unknown dialect '{}'", other),
                None,
                Some(Dialect::ALL.iter().map(|d| d.as_str().to_string()).collect()),
            )),
        }
    }
}
