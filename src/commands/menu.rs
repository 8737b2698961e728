use clap::Args;
use serde::Serialize;

use scriptsmith::{generate_menu, Dialect, MenuItem};

use super::{CmdResult, SpecArgs};

#[derive(Args)]
pub struct MenuArgs {
    #[command(flatten)]
    pub input: SpecArgs,

    /// Generate for this dialect instead of the document's
    #[arg(long)]
    pub dialect: Option<Dialect>,

    /// Print the menu code instead of the JSON response
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOutput {
    command: String,
    dialect: Dialect,
    items: Vec<MenuItem>,
    code: String,
}

pub fn is_raw(args: &MenuArgs) -> bool {
    args.raw
}

// The menu toggle is a document-level concern; this command always renders
// whatever items the document holds.
fn render(args: MenuArgs) -> scriptsmith::Result<(Dialect, Vec<MenuItem>, String)> {
    let state = args.input.load()?;
    let dialect = args.dialect.unwrap_or(state.dialect);
    let code = generate_menu(dialect, &state.menu_items);
    Ok((dialect, state.menu_items, code))
}

pub fn run(args: MenuArgs) -> CmdResult<MenuOutput> {
    let (dialect, items, code) = render(args)?;

    Ok((
        MenuOutput {
            command: "menu".to_string(),
            dialect,
            items,
            code,
        },
        0,
    ))
}

pub fn run_raw(args: MenuArgs) -> scriptsmith::Result<(String, i32)> {
    let (_, _, code) = render(args)?;
    Ok((code, 0))
}
