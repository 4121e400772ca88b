//! Market-cap enrichment.
//!
//! Wraps a [`MarketCapProvider`] so that every failure mode collapses into
//! an absent market cap. Nothing here is retried within a cycle.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::MarketCap;
use crate::port::MarketCapProvider;

/// Result of one lookup. `market_cap` is `None` when unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketCapSample {
    pub ticker: String,
    pub market_cap: Option<MarketCap>,
}

impl MarketCapSample {
    fn unavailable(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            market_cap: None,
        }
    }
}

/// Bounded, failure-absorbing market-cap lookups.
#[derive(Clone)]
pub struct Enricher {
    provider: Arc<dyn MarketCapProvider>,
    timeout: Duration,
}

impl Enricher {
    #[must_use]
    pub fn new(provider: Arc<dyn MarketCapProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Look up the market cap for `ticker`.
    ///
    /// Empty tickers are answered without a lookup. Errors, timeouts and
    /// non-positive values all yield an absent cap.
    pub async fn market_cap(&self, ticker: &str) -> MarketCapSample {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            debug!("Empty ticker, skipping market cap lookup");
            return MarketCapSample::unavailable(ticker);
        }

        let lookup = tokio::time::timeout(self.timeout, self.provider.market_cap(ticker)).await;
        let market_cap = match lookup {
            Ok(Ok(Some(cap))) if cap > MarketCap::ZERO => Some(cap),
            Ok(Ok(Some(cap))) => {
                debug!(ticker, market_cap = %cap, "Ignoring non-positive market cap");
                None
            }
            Ok(Ok(None)) => {
                debug!(ticker, "Market cap unavailable");
                None
            }
            Ok(Err(e)) => {
                warn!(ticker, error = %e, "Market cap lookup failed");
                None
            }
            Err(_) => {
                warn!(
                    ticker,
                    timeout_secs = self.timeout.as_secs(),
                    "Market cap lookup timed out"
                );
                None
            }
        };

        MarketCapSample {
            ticker: ticker.to_string(),
            market_cap,
        }
    }
}
