//! Notifier port for trade alerts.
//!
//! This module defines the [`Alert`] payload handed to notification
//! transports and the [`Notifier`] trait they implement.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{MarketCap, TradeRecord, Verdict};
use crate::error::NotifyError;

/// A qualifying trade ready to be announced.
#[derive(Debug, Clone)]
pub struct Alert {
    /// The normalized disclosure.
    pub record: TradeRecord,
    /// Why it qualified.
    pub verdict: Verdict,
    /// Market cap at classification time, if known.
    pub market_cap: Option<MarketCap>,
}

impl Alert {
    #[must_use]
    pub fn new(record: TradeRecord, verdict: Verdict, market_cap: Option<MarketCap>) -> Self {
        Self {
            record,
            verdict,
            market_cap,
        }
    }

    /// Cross-reference link for the ticker.
    #[must_use]
    pub fn quote_url(&self) -> String {
        format!("https://finance.yahoo.com/quote/{}", self.record.ticker)
    }
}

/// Trait for notification transports.
///
/// Delivery is binary: either the transport accepted the alert or it
/// reports a [`NotifyError`]. Implementations must bound their network
/// calls with a timeout.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Transport name for logging.
    fn name(&self) -> &'static str;

    /// Deliver one alert.
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError>;
}

/// Registry of notifiers (composite pattern).
///
/// Delivers each alert to every registered notifier in registration order.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Deliver an alert to all registered notifiers.
    ///
    /// Every notifier is attempted even if an earlier one fails. Returns the
    /// underlying error when the only notifier fails, or
    /// [`NotifyError::Partial`] when several are registered and any fail.
    pub async fn notify_all(&self, alert: &Alert) -> Result<(), NotifyError> {
        let mut failures = Vec::new();
        for notifier in &self.notifiers {
            match notifier.notify(alert).await {
                Ok(()) => info!(
                    transport = notifier.name(),
                    ticker = %alert.record.ticker,
                    "Alert delivered"
                ),
                Err(e) => {
                    warn!(
                        transport = notifier.name(),
                        ticker = %alert.record.ticker,
                        error = %e,
                        "Alert delivery failed"
                    );
                    failures.push(e);
                }
            }
        }

        match failures.len() {
            0 => Ok(()),
            1 if self.notifiers.len() == 1 => Err(failures.remove(0)),
            failed => Err(NotifyError::Partial {
                failed,
                total: self.notifiers.len(),
            }),
        }
    }

    /// Names of the registered notifiers.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn notify(&self, _alert: &Alert) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// A logging notifier that reports alerts via tracing.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let record = &alert.record;
        info!(
            ticker = %record.ticker,
            company = %record.company_name,
            buyer = %record.buyer_name,
            title = %record.title,
            amount = %record.invested_amount,
            market_cap = ?alert.market_cap,
            impact_pct = %alert.verdict.impact_pct.round_dp(3),
            reasons = %alert.verdict.reason_summary(),
            "Insider alert"
        );
        Ok(())
    }
}
