//! Interactive menu items and menu code generation.

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;

pub(crate) const BANNER_RULE: &str = "--------------------";
pub(crate) const BANNER_TITLE: &str = "      M A I N   M E N U";
pub(crate) const EXIT_CHOICE: &str = "0";
pub(crate) const EXIT_LABEL: &str = "0. Exit";
pub(crate) const EXIT_MESSAGE: &str = "Exiting.";
pub(crate) const INVALID_OPTION_MESSAGE: &str = "Error: Invalid option...";
pub(crate) const INVALID_OPTION_PAUSE_SECS: u32 = 2;

/// One numbered menu choice. `action` is spliced verbatim into the
/// generated branch body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub title: String,
    pub action: String,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            action: action.into(),
        }
    }
}

/// Pair each item with its 1-based menu number.
pub(crate) fn numbered(items: &[MenuItem]) -> impl Iterator<Item = (usize, &MenuItem)> {
    items.iter().enumerate().map(|(index, item)| (index + 1, item))
}

/// Generate the menu source for `dialect`. Empty `items` yields empty text.
pub fn generate_menu(dialect: Dialect, items: &[MenuItem]) -> String {
    if items.is_empty() {
        return String::new();
    }
    dialect.syntax().render_menu(items)
}

/// Append an item. Blank title or action (after trimming) leaves the list
/// unchanged; values are stored as given.
pub fn add_item(mut items: Vec<MenuItem>, title: &str, action: &str) -> Vec<MenuItem> {
    if title.trim().is_empty() || action.trim().is_empty() {
        return items;
    }
    items.push(MenuItem::new(title, action));
    items
}

/// Remove the item at `index`, keeping the order of the rest.
/// Out-of-range indexes leave the list unchanged.
pub fn remove_item(mut items: Vec<MenuItem>, index: usize) -> Vec<MenuItem> {
    if index < items.len() {
        items.remove(index);
    }
    items
}
