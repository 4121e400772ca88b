use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use insiderwatch::domain::MarketCap;
use insiderwatch::error::EnrichmentError;
use insiderwatch::port::MarketCapProvider;

/// Market data with fixed answers; unknown tickers are unavailable.
#[derive(Clone, Default)]
pub struct FixedMarketData {
    caps: HashMap<String, MarketCap>,
    panics_on: Option<String>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl FixedMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cap(mut self, ticker: &str, cap: MarketCap) -> Self {
        self.caps.insert(ticker.to_string(), cap);
        self
    }

    /// Panic instead of answering for `ticker`.
    pub fn panicking_on(mut self, ticker: &str) -> Self {
        self.panics_on = Some(ticker.to_string());
        self
    }

    /// Tickers looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }
}

#[async_trait]
impl MarketCapProvider for FixedMarketData {
    async fn market_cap(&self, ticker: &str) -> Result<Option<MarketCap>, EnrichmentError> {
        self.lookups.lock().push(ticker.to_string());
        if self.panics_on.as_deref() == Some(ticker) {
            panic!("market data exploded for {ticker}");
        }
        self.caps
            .get(ticker)
            .copied()
            .map(Some)
            .ok_or_else(|| EnrichmentError::Unavailable {
                ticker: ticker.to_string(),
            })
    }
}
