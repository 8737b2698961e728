use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

mod commands;
mod output;
mod tty;

use commands::{build, config, doc, export, menu, snippet};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "scriptsmith")]
#[command(version = VERSION)]
#[command(about = "Assemble Bash and PowerShell scripts from snippets, ASCII art and menus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a document into script text
    Build(build::BuildArgs),
    /// Generate only the interactive menu code for a document
    Menu(menu::MenuArgs),
    /// Browse built-in snippets
    Snippet(snippet::SnippetArgs),
    /// Create and edit document files
    Doc(doc::DocArgs),
    /// Write the assembled script to script.sh / script.ps1
    Export(export::ExportArgs),
    /// Manage global scriptsmith configuration
    Config(config::ConfigArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Build(args) if build::is_raw(args) => ResponseMode::Raw,
        Commands::Menu(args) if menu::is_raw(args) => ResponseMode::Raw,
        Commands::Snippet(args) if snippet::is_raw(args) => ResponseMode::Raw,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    if let ResponseMode::Raw = response_mode(&cli.command) {
        return match commands::run_raw(cli.command) {
            Ok((content, exit_code)) => {
                let _ = output::print_raw(&content);
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                let exit_code = output::exit_code_for_error(err.code);
                let _ = output::print_result::<serde_json::Value>(Err(err));
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        };
    }

    let (json_result, exit_code) = commands::run_json(cli.command);
    let _ = output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
