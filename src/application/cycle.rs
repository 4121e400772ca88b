//! One polling pass: fetch, filter, evaluate each new row, report.
//!
//! A cycle moves through [`CyclePhase::Fetching`], [`CyclePhase::Filtering`]
//! and [`CyclePhase::PerRowEvaluation`] before settling in
//! [`CyclePhase::Idle`]. A failed fetch skips straight to `Idle` and leaves
//! the seen set untouched.
//!
//! Rows are evaluated sequentially in source order:
//!
//! 1. Dedup check (already-seen rows are skipped silently)
//! 2. Market-cap lookup, when the policy needs it
//! 3. Classification
//! 4. Notification, when the row qualifies
//! 5. Mark seen, whatever happened above

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, error, info, warn};

use super::dedup::Deduplicator;
use super::enrich::Enricher;
use crate::domain::{classify, Policy, RecordNormalizer, TradeRecord};
use crate::port::{Alert, DisclosureSource, NotifierRegistry};

/// Cycle state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Fetching,
    Filtering,
    PerRowEvaluation,
    Idle,
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetching => "fetching",
            Self::Filtering => "filtering",
            Self::PerRowEvaluation => "per-row-evaluation",
            Self::Idle => "idle",
        })
    }
}

/// Counts reported when a cycle reaches [`CyclePhase::Idle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// The source could not be read; nothing else ran.
    pub fetch_failed: bool,
    /// Data rows in the fetched table.
    pub rows_fetched: usize,
    /// Rows above the pre-filter floor.
    pub candidates: usize,
    /// Candidates skipped because their identity was already seen.
    pub already_seen: usize,
    /// Candidates classified this cycle.
    pub evaluated: usize,
    /// Evaluated rows with a positive verdict.
    pub qualified: usize,
    /// Alerts accepted by every transport.
    pub notified: usize,
    /// Alerts at least one transport rejected.
    pub notify_failed: usize,
    /// Lookups that came back without a market cap.
    pub market_cap_unavailable: usize,
    /// Rows whose evaluation panicked.
    pub row_failures: usize,
    /// Size of the seen set after the cycle.
    pub seen_total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    NotAttempted,
    DryRun,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy)]
struct RowOutcome {
    qualifies: bool,
    delivery: Delivery,
    market_cap_missing: bool,
}

impl CycleSummary {
    fn record(&mut self, outcome: RowOutcome) {
        self.evaluated += 1;
        if outcome.qualifies {
            self.qualified += 1;
        }
        if outcome.market_cap_missing {
            self.market_cap_unavailable += 1;
        }
        match outcome.delivery {
            Delivery::Sent => self.notified += 1,
            Delivery::Failed => self.notify_failed += 1,
            Delivery::NotAttempted | Delivery::DryRun => {}
        }
    }
}

/// Runs polling cycles against injected collaborators.
pub struct CycleRunner {
    source: Arc<dyn DisclosureSource>,
    dedup: Deduplicator,
    enricher: Enricher,
    notifiers: Arc<NotifierRegistry>,
    policy: Policy,
    dry_run: bool,
}

impl CycleRunner {
    #[must_use]
    pub fn new(
        source: Arc<dyn DisclosureSource>,
        dedup: Deduplicator,
        enricher: Enricher,
        notifiers: Arc<NotifierRegistry>,
        policy: Policy,
    ) -> Self {
        Self {
            source,
            dedup,
            enricher,
            notifiers,
            policy,
            dry_run: false,
        }
    }

    /// Classify and log qualifying rows without sending anything.
    ///
    /// Rows are still marked seen.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    #[must_use]
    pub fn dedup(&self) -> &Deduplicator {
        &self.dedup
    }

    /// Run one full cycle and return its summary.
    ///
    /// Never fails: fetch errors end the cycle early and panics inside a
    /// row's evaluation are contained to that row.
    pub async fn run_once(&self) -> CycleSummary {
        let mut summary = CycleSummary::default();

        debug!(phase = %CyclePhase::Fetching, source = self.source.name(), "Cycle phase");
        let table = match self.source.fetch_table().await {
            Ok(table) => table,
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "Fetch failed, skipping cycle");
                summary.fetch_failed = true;
                summary.seen_total = self.dedup.len();
                debug!(phase = %CyclePhase::Idle, "Cycle phase");
                return summary;
            }
        };
        summary.rows_fetched = table.len();

        debug!(phase = %CyclePhase::Filtering, rows = table.len(), "Cycle phase");
        let normalizer = RecordNormalizer::for_table(&table);
        if normalizer.columns().money_column().is_none() {
            warn!(headers = ?table.headers(), "No amount column found; every row will be filtered");
        }
        if normalizer.columns().lacks_ticker() {
            warn!(headers = ?table.headers(), "No ticker column found; lookups will be skipped");
        }
        let candidates: Vec<TradeRecord> = table
            .rows()
            .iter()
            .map(|row| normalizer.normalize(row))
            .filter(|record| self.policy.passes_prefilter(record.invested_amount))
            .collect();
        summary.candidates = candidates.len();

        debug!(phase = %CyclePhase::PerRowEvaluation, candidates = candidates.len(), "Cycle phase");
        for record in candidates {
            let identity = record.identity();
            if !self.dedup.is_new(&identity) {
                summary.already_seen += 1;
                continue;
            }

            match AssertUnwindSafe(self.evaluate(&record)).catch_unwind().await {
                Ok(outcome) => summary.record(outcome),
                Err(payload) => {
                    error!(
                        ticker = %record.ticker,
                        panic = panic_message(payload.as_ref()),
                        "Row evaluation panicked"
                    );
                    summary.row_failures += 1;
                }
            }
            self.dedup.mark_seen(identity);
        }

        summary.seen_total = self.dedup.len();
        debug!(phase = %CyclePhase::Idle, "Cycle phase");
        info!(
            rows = summary.rows_fetched,
            candidates = summary.candidates,
            already_seen = summary.already_seen,
            evaluated = summary.evaluated,
            qualified = summary.qualified,
            notified = summary.notified,
            notify_failed = summary.notify_failed,
            market_cap_unavailable = summary.market_cap_unavailable,
            row_failures = summary.row_failures,
            seen_total = summary.seen_total,
            "Cycle complete"
        );
        summary
    }

    async fn evaluate(&self, record: &TradeRecord) -> RowOutcome {
        let needs_cap = self.policy.needs_market_cap();
        let mut market_cap = None;
        if needs_cap {
            market_cap = self.enricher.market_cap(&record.ticker).await.market_cap;
        }

        let verdict = classify(record, market_cap, &self.policy);
        debug!(
            ticker = %record.ticker,
            amount = %record.invested_amount,
            qualifies = verdict.qualifies,
            impact_pct = %verdict.impact_pct,
            "Row classified"
        );

        if !verdict.qualifies {
            return RowOutcome {
                qualifies: false,
                delivery: Delivery::NotAttempted,
                market_cap_missing: needs_cap && market_cap.is_none(),
            };
        }

        if !needs_cap {
            market_cap = self.enricher.market_cap(&record.ticker).await.market_cap;
        }
        let market_cap_missing = market_cap.is_none();
        let alert = Alert::new(record.clone(), verdict, market_cap);

        let delivery = if self.dry_run {
            info!(
                ticker = %record.ticker,
                buyer = %record.buyer_name,
                amount = %record.invested_amount,
                reasons = %alert.verdict.reason_summary(),
                "Dry-run: would send alert"
            );
            Delivery::DryRun
        } else {
            match self.notifiers.notify_all(&alert).await {
                Ok(()) => Delivery::Sent,
                Err(e) => {
                    warn!(ticker = %record.ticker, error = %e, "Alert not delivered; marking seen anyway");
                    Delivery::Failed
                }
            }
        };

        RowOutcome {
            qualifies: true,
            delivery,
            market_cap_missing,
        }
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
