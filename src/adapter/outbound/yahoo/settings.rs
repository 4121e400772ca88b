//! Market data configuration.

use serde::Deserialize;

use crate::adapter::outbound::dataroma::settings::DEFAULT_USER_AGENT;

/// Market-cap lookup settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDataConfig {
    /// Quote endpoint; the ticker is passed as `symbols=`.
    #[serde(default = "default_quote_url")]
    pub quote_url: String,
    /// Upper bound for one lookup, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with lookups.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_quote_url() -> String {
    "https://query1.finance.yahoo.com/v7/finance/quote".into()
}

const fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            quote_url: default_quote_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
