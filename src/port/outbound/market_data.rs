//! Market data port for market-cap lookups.

use async_trait::async_trait;

use crate::domain::MarketCap;
use crate::error::EnrichmentError;

/// Looks up the current market capitalization of a ticker.
///
/// `Ok(None)` means the provider answered but had no figure for the ticker.
/// Callers go through [`crate::application::enrich::Enricher`], which folds
/// every error into an absent value.
#[async_trait]
pub trait MarketCapProvider: Send + Sync {
    async fn market_cap(&self, ticker: &str) -> Result<Option<MarketCap>, EnrichmentError>;
}
