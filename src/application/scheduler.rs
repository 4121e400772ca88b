//! Fixed-delay polling loop.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};

use futures_util::FutureExt;
use tracing::{error, info};

use super::cycle::{panic_message, CycleRunner, CycleSummary};

/// Repeats cycles with a fixed pause after each one.
///
/// The effective period is the interval plus the cycle's own duration. A
/// panicking cycle is logged and the loop carries on.
pub struct Scheduler {
    runner: CycleRunner,
    interval: Duration,
}

impl Scheduler {
    #[must_use]
    pub fn new(runner: CycleRunner, interval: Duration) -> Self {
        Self { runner, interval }
    }

    #[must_use]
    pub fn runner(&self) -> &CycleRunner {
        &self.runner
    }

    /// Run one cycle, containing any panic.
    ///
    /// Returns `None` when the cycle panicked.
    pub async fn tick(&self) -> Option<CycleSummary> {
        let started = Instant::now();
        match AssertUnwindSafe(self.runner.run_once()).catch_unwind().await {
            Ok(summary) => {
                info!(elapsed = ?started.elapsed(), "Cycle finished");
                Some(summary)
            }
            Err(payload) => {
                error!(panic = panic_message(payload.as_ref()), "Cycle panicked");
                None
            }
        }
    }

    /// Loop until `shutdown` resolves.
    ///
    /// Shutdown is checked while waiting between cycles and while a cycle is
    /// in flight; an interrupted cycle is dropped at its current await point.
    pub async fn run_until<F>(&self, shutdown: F) -> usize
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut cycles = 0usize;

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!(cycles, "Shutdown requested");
                    break;
                }
                _ = self.tick() => {
                    cycles += 1;
                }
            }

            tokio::select! {
                _ = &mut shutdown => {
                    info!(cycles, "Shutdown requested");
                    break;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        cycles
    }
}
