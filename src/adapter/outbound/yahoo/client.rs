//! Market-cap lookups against the Yahoo Finance quote endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::dto::QuoteEnvelope;
use super::settings::MarketDataConfig;
use crate::domain::MarketCap;
use crate::error::EnrichmentError;
use crate::port::MarketCapProvider;

/// [`MarketCapProvider`] backed by the Yahoo Finance quote API.
pub struct YahooMarketData {
    http: HttpClient,
    quote_url: String,
}

impl YahooMarketData {
    /// Build a provider with a timeout-bounded HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &MarketDataConfig) -> Result<Self, EnrichmentError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            quote_url: config.quote_url.clone(),
        })
    }
}

#[async_trait]
impl MarketCapProvider for YahooMarketData {
    async fn market_cap(&self, ticker: &str) -> Result<Option<MarketCap>, EnrichmentError> {
        let envelope: QuoteEnvelope = self
            .http
            .get(&self.quote_url)
            .query(&[("symbols", ticker)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let cap = envelope.market_cap_for(ticker);
        debug!(ticker, market_cap = ?cap, "Market cap lookup");
        Ok(cap)
    }
}
