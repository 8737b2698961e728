use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use scriptsmith::defaults;
use scriptsmith::export::{self, ExportOptions, ExportReport};

use super::{CmdResult, SpecArgs};

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: SpecArgs,

    /// Directory to write script.sh / script.ps1 into (default from config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite an existing script
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutput {
    command: String,
    #[serde(flatten)]
    report: ExportReport,
}

pub fn run(args: ExportArgs) -> CmdResult<ExportOutput> {
    let state = args.input.load()?;
    let config = defaults::load_defaults();
    let options = ExportOptions::from_config(&config.export, args.output_dir, args.force);

    let report = export::export(&state, &options)?;

    Ok((
        ExportOutput {
            command: "export".to_string(),
            report,
        },
        0,
    ))
}
