use clap::{Args, Subcommand};
use serde::Serialize;

use scriptsmith::snippets;
use scriptsmith::{Dialect, Snippet};

use super::CmdResult;

#[derive(Args)]
pub struct SnippetArgs {
    #[command(subcommand)]
    command: SnippetCommand,
}

#[derive(Subcommand)]
enum SnippetCommand {
    /// List built-in snippets
    List {
        /// Only list snippets for this dialect
        #[arg(long)]
        dialect: Option<Dialect>,
    },
    /// Show one snippet's code
    Show {
        /// Snippet ID (e.g., read_input)
        id: String,

        #[arg(long, default_value = "shell")]
        dialect: Dialect,

        /// Print the snippet code instead of the JSON response
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Debug, Serialize)]
pub struct DialectSnippets {
    dialect: Dialect,
    name: &'static str,
    snippets: &'static [Snippet],
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum SnippetOutput {
    #[serde(rename = "snippet.list")]
    List { dialects: Vec<DialectSnippets> },

    #[serde(rename = "snippet.show")]
    Show {
        dialect: Dialect,
        snippet: &'static Snippet,
    },
}

pub fn is_raw(args: &SnippetArgs) -> bool {
    matches!(args.command, SnippetCommand::Show { raw: true, .. })
}

pub fn run(args: SnippetArgs) -> CmdResult<SnippetOutput> {
    match args.command {
        SnippetCommand::List { dialect } => {
            let dialects = match dialect {
                Some(d) => vec![d],
                None => Dialect::ALL.to_vec(),
            };
            let dialects = dialects
                .into_iter()
                .map(|dialect| DialectSnippets {
                    dialect,
                    name: dialect.name(),
                    snippets: snippets::snippets(dialect),
                })
                .collect();
            Ok((SnippetOutput::List { dialects }, 0))
        }
        SnippetCommand::Show { id, dialect, .. } => {
            let snippet = snippets::require(dialect, &id)?;
            Ok((SnippetOutput::Show { dialect, snippet }, 0))
        }
    }
}

pub fn run_raw(args: SnippetArgs) -> scriptsmith::Result<(String, i32)> {
    match args.command {
        SnippetCommand::Show { id, dialect, .. } => {
            let snippet = snippets::require(dialect, &id)?;
            Ok((snippet.code.to_string(), 0))
        }
        SnippetCommand::List { .. } => Err(scriptsmith::Error::validation_invalid_argument(
            "output_mode",
            "snippet list does not support raw output",
            None,
            None,
        )),
    }
}
