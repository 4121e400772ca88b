//! Command-line adapter (driving side).

pub mod check;
pub mod command;
pub mod output;
pub mod run;

use command::{CheckCommand, Cli, ColorChoice, Commands};

use crate::error::Result;

/// Apply global flags and run the selected command.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
    });

    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Check(CheckCommand::Config(arg)) => check::config::execute_config(&arg.path),
        Commands::Check(CheckCommand::Source(arg)) => check::source::execute_source(&arg.path).await,
    }
}
