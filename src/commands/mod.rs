use clap::Args;

use scriptsmith::document::{self, DocumentState};

pub type CmdResult<T> = scriptsmith::Result<(T, i32)>;

/// Shared arguments for commands that read a document spec.
///
/// The spec is inline JSON, `@path` to read a file, or `-` for stdin.
/// Omitting it entirely yields a default (empty shell) document.
#[derive(Args, Default, Debug)]
pub struct SpecArgs {
    /// Document JSON spec (positional, supports @file and - for stdin)
    pub spec: Option<String>,

    /// Explicit document JSON spec (takes precedence over positional)
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

impl SpecArgs {
    /// Get the JSON spec from either --json or positional argument
    pub fn json_spec(&self) -> Option<&str> {
        self.json.as_deref().or(self.spec.as_deref())
    }

    pub fn load(&self) -> scriptsmith::Result<DocumentState> {
        match self.json_spec() {
            Some(spec) => document::from_spec(spec),
            None => Ok(DocumentState::default()),
        }
    }
}

pub mod build;
pub mod config;
pub mod doc;
pub mod export;
pub mod menu;
pub mod snippet;

/// Commands that can print raw script text instead of the JSON envelope.
pub(crate) fn run_raw(command: crate::Commands) -> scriptsmith::Result<(String, i32)> {
    match command {
        crate::Commands::Build(args) => build::run_raw(args),
        crate::Commands::Menu(args) => menu::run_raw(args),
        crate::Commands::Snippet(args) => snippet::run_raw(args),
        _ => Err(scriptsmith::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support raw output",
            None,
            None,
        )),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (scriptsmith::Result<serde_json::Value>, i32) {
    crate::tty::status("scriptsmith is working...");

    match command {
        crate::Commands::Build(args) => dispatch!(args, build),
        crate::Commands::Menu(args) => dispatch!(args, menu),
        crate::Commands::Snippet(args) => dispatch!(args, snippet),
        crate::Commands::Doc(args) => dispatch!(args, doc),
        crate::Commands::Export(args) => dispatch!(args, export),
        crate::Commands::Config(args) => dispatch!(args, config),
    }
}
