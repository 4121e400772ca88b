//! Disclosure source configuration.

use serde::Deserialize;

/// Browser-like user agent; the page rejects obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Where and how to fetch the disclosure table.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Page URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Text identifying the disclosure table among all tables on the page.
    #[serde(default = "default_table_marker")]
    pub table_marker: String,
    /// Upper bound for the whole request, in seconds.
    #[serde(default = "default_fetch_timeout_seconds")]
    pub fetch_timeout_seconds: u64,
}

fn default_url() -> String {
    "https://www.dataroma.com/m/ins/ins.php".into()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn default_table_marker() -> String {
    "Filing".into()
}

const fn default_fetch_timeout_seconds() -> u64 {
    20
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
            table_marker: default_table_marker(),
            fetch_timeout_seconds: default_fetch_timeout_seconds(),
        }
    }
}
