//! Handler for the `run` command.

use tracing::warn;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::runtime;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;
    config.init_logging();

    print_startup_config(&config);

    if args.once {
        if let Some(summary) = runtime::run_once(&config).await? {
            output::summary(&summary);
        }
        return Ok(());
    }

    runtime::run_with_shutdown(&config, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    })
    .await
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if args.dry_run {
        config.dry_run = true;
    }
    if let Some(interval) = args.interval {
        config.schedule.poll_interval_seconds = interval;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs || output::is_json() {
        config.logging.format = LogFormat::Json;
    }
}

fn print_startup_config(config: &Config) {
    let policy = config.policy();
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", &config.source.url);
    output::field("Predicates", format!("{:?}", policy.predicates));
    output::field("Interval", format!("{}s", config.schedule.poll_interval_seconds));

    if config.dry_run {
        output::warning("Dry-run mode enabled - alerts will be logged, not sent");
    }
}
