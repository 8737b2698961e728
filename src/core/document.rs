//! Document state and the reducer that evolves it.
//!
//! The state is a plain value. Every edit is an [`Action`], and
//! [`DocumentState::apply`] returns the next state instead of mutating in
//! place, so the preview is always `assemble(&state)` for the latest value.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assemble::{self, Assembly};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::io;
use crate::json;
use crate::menu::{self, MenuItem};
use crate::snippets;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentState {
    pub dialect: Dialect,
    pub ascii_art_enabled: bool,
    pub ascii_art_text: String,
    pub menu_enabled: bool,
    pub menu_items: Vec<MenuItem>,
    pub main_body_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetDialect(Dialect),
    SetAsciiArtEnabled(bool),
    SetAsciiArtText(String),
    SetMenuEnabled(bool),
    SetMainBody(String),
    /// Append snippet code to the main body.
    InsertSnippet(String),
    AddMenuItem { title: String, action: String },
    /// Zero-based index into `menu_items`.
    RemoveMenuItem(usize),
}

impl DocumentState {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetDialect(dialect) => Self { dialect, ..self },
            Action::SetAsciiArtEnabled(ascii_art_enabled) => Self {
                ascii_art_enabled,
                ..self
            },
            Action::SetAsciiArtText(ascii_art_text) => Self {
                ascii_art_text,
                ..self
            },
            Action::SetMenuEnabled(menu_enabled) => Self {
                menu_enabled,
                ..self
            },
            Action::SetMainBody(main_body_text) => Self {
                main_body_text,
                ..self
            },
            Action::InsertSnippet(code) => Self {
                main_body_text: snippets::insert_snippet(&self.main_body_text, &code),
                ..self
            },
            Action::AddMenuItem { title, action } => Self {
                menu_items: menu::add_item(self.menu_items, &title, &action),
                ..self
            },
            Action::RemoveMenuItem(index) => Self {
                menu_items: menu::remove_item(self.menu_items, index),
                ..self
            },
        }
    }

    pub fn preview(&self) -> String {
        assemble::assemble(self)
    }

    pub fn report(&self) -> Assembly {
        assemble::assemble_report(self)
    }
}

/// Parse a document from a JSON spec (inline JSON, `@path`, or `-` for stdin).
pub fn from_spec(spec: &str) -> Result<DocumentState> {
    let raw = json::read_json_spec_to_string(spec)?;
    json::from_str(&raw)
}

/// Load a document file. A missing file is `document.not_found`.
pub fn load(path: &Path) -> Result<DocumentState> {
    if !path.exists() {
        return Err(Error::document_not_found(path.display().to_string()));
    }
    let raw = io::read_file(path, &format!("read {}", path.display()))?;
    json::from_str(&raw)
}

pub fn save(path: &Path, state: &DocumentState) -> Result<()> {
    let content = json::to_string_pretty(state)?;
    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}
