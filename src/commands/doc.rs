use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use scriptsmith::defaults;
use scriptsmith::document::{self, Action, DocumentState};
use scriptsmith::io;
use scriptsmith::snippets;
use scriptsmith::validation;
use scriptsmith::{log_status, Dialect, Section};

use super::CmdResult;

#[derive(Args)]
pub struct DocArgs {
    #[command(subcommand)]
    command: DocCommand,
}

#[derive(Subcommand)]
enum DocCommand {
    /// Create a new document file with default settings
    New {
        /// Document path (e.g., menu.json)
        path: PathBuf,

        /// Dialect (defaults to the configured default dialect)
        #[arg(long)]
        dialect: Option<Dialect>,

        /// Replace an existing document
        #[arg(long)]
        force: bool,
    },
    /// Show a document and its preview
    Show { path: PathBuf },
    /// Switch the target dialect
    Dialect { path: PathBuf, dialect: Dialect },
    /// Toggle the ASCII art block or replace its text
    Ascii {
        path: PathBuf,

        #[arg(long, conflicts_with = "off")]
        on: bool,

        #[arg(long)]
        off: bool,

        /// Art text (supports @file and - for stdin)
        #[arg(long)]
        text: Option<String>,
    },
    /// Toggle the interactive menu
    Menu {
        path: PathBuf,

        #[arg(long, conflicts_with = "off")]
        on: bool,

        #[arg(long)]
        off: bool,
    },
    /// Replace the main script body
    Body {
        path: PathBuf,

        /// Body text (supports @file and - for stdin)
        text: String,
    },
    /// Append a built-in snippet to the main script body
    Insert {
        path: PathBuf,

        /// Snippet ID (see `scriptsmith snippet list`)
        id: String,
    },
    /// Append a menu item
    AddItem {
        path: PathBuf,
        title: String,
        /// Command or statement run when the item is chosen
        action: String,
    },
    /// Remove a menu item by its menu number (1-based)
    RemoveItem { path: PathBuf, number: usize },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocOutput {
    command: String,
    path: String,
    changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    added: Option<bool>,
    document: DocumentState,
    sections: Vec<Section>,
    preview: String,
}

pub fn run(args: DocArgs) -> CmdResult<DocOutput> {
    match args.command {
        DocCommand::New {
            path,
            dialect,
            force,
        } => create(&path, dialect, force),
        DocCommand::Show { path } => {
            let state = document::load(&path)?;
            Ok((output("doc.show", &path, state, false), 0))
        }
        DocCommand::Dialect { path, dialect } => {
            commit(&path, "doc.dialect", vec![Action::SetDialect(dialect)])
        }
        DocCommand::Ascii {
            path,
            on,
            off,
            text,
        } => {
            let mut actions = Vec::new();
            if let Some(text) = text {
                actions.push(Action::SetAsciiArtText(read_text(&text)?));
            }
            if let Some(enabled) = toggle(on, off) {
                actions.push(Action::SetAsciiArtEnabled(enabled));
            }
            if actions.is_empty() {
                return Err(scriptsmith::Error::validation_missing_argument(vec![
                    "--on".to_string(),
                    "--off".to_string(),
                    "--text".to_string(),
                ]));
            }
            commit(&path, "doc.ascii", actions)
        }
        DocCommand::Menu { path, on, off } => {
            let enabled = toggle(on, off).ok_or_else(|| {
                scriptsmith::Error::validation_missing_argument(vec![
                    "--on".to_string(),
                    "--off".to_string(),
                ])
            })?;
            commit(&path, "doc.menu", vec![Action::SetMenuEnabled(enabled)])
        }
        DocCommand::Body { path, text } => {
            commit(&path, "doc.body", vec![Action::SetMainBody(read_text(&text)?)])
        }
        DocCommand::Insert { path, id } => {
            let state = document::load(&path)?;
            let snippet = snippets::require(state.dialect, &id)?;
            log_status!("doc", "Inserting snippet '{}'", snippet.id);
            commit(
                &path,
                "doc.insert",
                vec![Action::InsertSnippet(snippet.code.to_string())],
            )
        }
        DocCommand::AddItem {
            path,
            title,
            action,
        } => {
            let (mut out, code) =
                commit(&path, "doc.add_item", vec![Action::AddMenuItem { title, action }])?;
            out.added = Some(out.changed);
            if !out.changed {
                log_status!("doc", "Skipped menu item with blank title or action");
            }
            Ok((out, code))
        }
        DocCommand::RemoveItem { path, number } => {
            let state = document::load(&path)?;
            let index = validation::require_position(number, state.menu_items.len(), "number")?;
            commit(&path, "doc.remove_item", vec![Action::RemoveMenuItem(index)])
        }
    }
}

fn create(path: &Path, dialect: Option<Dialect>, force: bool) -> CmdResult<DocOutput> {
    if path.exists() && !force {
        return Err(scriptsmith::Error::validation_invalid_argument(
            "path",
            "Document already exists",
            Some(path.display().to_string()),
            None,
        )
        .with_hint("Pass --force to replace it"));
    }

    let dialect = dialect.unwrap_or_else(|| defaults::load_defaults().dialect);
    let state = DocumentState::new(dialect);
    document::save(path, &state)?;
    log_status!("doc", "Created {} ({})", path.display(), dialect);

    Ok((output("doc.new", path, state, true), 0))
}

/// Load, apply `actions` in order, and save only when the state changed.
fn commit(path: &Path, command: &str, actions: Vec<Action>) -> CmdResult<DocOutput> {
    let before = document::load(path)?;
    let after = actions
        .into_iter()
        .fold(before.clone(), |state, action| state.apply(action));

    let changed = after != before;
    if changed {
        document::save(path, &after)?;
    }

    Ok((output(command, path, after, changed), 0))
}

fn output(command: &str, path: &Path, state: DocumentState, changed: bool) -> DocOutput {
    let report = state.report();
    DocOutput {
        command: command.to_string(),
        path: path.display().to_string(),
        changed,
        added: None,
        document: state,
        sections: report.sections,
        preview: report.content,
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn read_text(value: &str) -> scriptsmith::Result<String> {
    io::read_input(value, "text")
}
