use clap::Args;
use serde::Serialize;

use scriptsmith::{Dialect, Section};

use super::{CmdResult, SpecArgs};

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub input: SpecArgs,

    /// Print the script text instead of the JSON response
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOutput {
    command: String,
    dialect: Dialect,
    file_name: String,
    sections: Vec<Section>,
    line_count: usize,
    bytes: usize,
    content: String,
}

pub fn is_raw(args: &BuildArgs) -> bool {
    args.raw
}

pub fn run(args: BuildArgs) -> CmdResult<BuildOutput> {
    let state = args.input.load()?;
    let report = state.report();

    Ok((
        BuildOutput {
            command: "build".to_string(),
            dialect: state.dialect,
            file_name: state.dialect.export_file_name(),
            sections: report.sections,
            line_count: report.content.lines().count(),
            bytes: report.content.len(),
            content: report.content,
        },
        0,
    ))
}

pub fn run_raw(args: BuildArgs) -> scriptsmith::Result<(String, i32)> {
    let state = args.input.load()?;
    Ok((state.preview(), 0))
}
