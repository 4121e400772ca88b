//! Quote endpoint response types.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level quote response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEnvelope {
    pub quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub result: Vec<Quote>,
}

/// One quote. Only the fields the monitor reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    #[serde(default)]
    pub market_cap: Option<Decimal>,
}

impl QuoteEnvelope {
    /// Market cap for `ticker`, if present and positive.
    #[must_use]
    pub fn market_cap_for(&self, ticker: &str) -> Option<Decimal> {
        self.quote_response
            .result
            .iter()
            .find(|q| q.symbol.eq_ignore_ascii_case(ticker))
            .and_then(|q| q.market_cap)
            .filter(|cap| *cap > Decimal::ZERO)
    }
}
