//! Runtime lifecycle: wire, log the active policy, then poll.

use std::future::Future;

use tracing::info;

use super::bootstrap::build_cycle_runner;
use super::config::settings::Config;
use crate::application::{CycleSummary, Scheduler};
use crate::domain::Policy;
use crate::error::Result;

fn log_policy(policy: &Policy, dry_run: bool, interval_secs: u64) {
    info!(
        predicates = ?policy.predicates,
        min_invest_absolute = %policy.min_invest_absolute,
        whale_threshold = %policy.whale_threshold,
        min_relative_impact_pct = %policy.min_relative_impact_pct,
        cfo_relative_impact_pct = %policy.cfo_relative_impact_pct,
        max_reporting_lag_days = policy.max_reporting_lag_days,
        role_markers = ?policy.role_markers,
        poll_interval_secs = interval_secs,
        dry_run,
        "Starting insiderwatch"
    );
}

/// Run exactly one cycle and return its summary.
///
/// # Errors
///
/// Returns an error if the runtime cannot be wired from `config`.
pub async fn run_once(config: &Config) -> Result<Option<CycleSummary>> {
    let runner = build_cycle_runner(config)?;
    log_policy(runner.policy(), config.dry_run, config.schedule.poll_interval_seconds);
    let scheduler = Scheduler::new(runner, config.schedule.poll_interval());
    Ok(scheduler.tick().await)
}

/// Poll until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the runtime cannot be wired from `config`. Cycle
/// failures never end the loop.
pub async fn run_with_shutdown<F>(config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let runner = build_cycle_runner(config)?;
    log_policy(runner.policy(), config.dry_run, config.schedule.poll_interval_seconds);

    let scheduler = Scheduler::new(runner, config.schedule.poll_interval());
    let cycles = scheduler.run_until(shutdown).await;
    info!(
        cycles,
        seen = scheduler.runner().dedup().len(),
        "insiderwatch stopped"
    );
    Ok(())
}
