//! Command-line interface definitions.
//!
//! Defines the CLI structure for insiderwatch using `clap`: a long-running
//! `run` command plus diagnostic `check` commands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file path.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Insider-trading disclosure monitor
#[derive(Parser, Debug)]
#[command(name = "insiderwatch")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the disclosure page and send alerts
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `insiderwatch check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and report enabled transports.
    Config(ConfigPathArg),
    /// Fetch the disclosure table once and report what was found.
    Source(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(default_value = DEFAULT_CONFIG)]
    pub path: PathBuf,
}

/// Arguments for the `run` subcommand.
///
/// Flags override the corresponding configuration file values.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Classify and log, but send no alerts.
    #[arg(long)]
    pub dry_run: bool,

    /// Run a single cycle and exit.
    #[arg(long)]
    pub once: bool,

    /// Override the poll interval in seconds.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["insiderwatch", "run"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG));
        assert!(!args.dry_run);
        assert!(!args.once);
    }

    #[test]
    fn run_flags() {
        let cli = Cli::try_parse_from([
            "insiderwatch",
            "run",
            "--config",
            "alt.toml",
            "--dry-run",
            "--once",
            "--interval",
            "60",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.config, PathBuf::from("alt.toml"));
        assert!(args.dry_run);
        assert!(args.once);
        assert_eq!(args.interval, Some(60));
    }

    #[test]
    fn check_source_takes_path() {
        let cli = Cli::try_parse_from(["insiderwatch", "check", "source", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Source(ConfigPathArg { ref path })) if path == &PathBuf::from("x.toml")
        ));
    }
}
