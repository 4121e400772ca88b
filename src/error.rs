use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures while obtaining the disclosure table.
///
/// Any of these aborts the current cycle only; the seen set is left untouched.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("no table containing '{marker}' found in document")]
    TableNotFound { marker: String },

    #[error("disclosure table has no data rows")]
    EmptyTable,
}

/// Market-cap lookup failures.
///
/// Never leaves the enricher: callers only ever see an absent market cap.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("no market cap reported for {ticker}")]
    Unavailable { ticker: String },
}

/// Notification transport failures.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("{transport} transport is not configured: {reason}")]
    NotConfigured {
        transport: &'static str,
        reason: String,
    },

    #[error("failed to build message: {0}")]
    Message(String),

    #[error("{transport} delivery failed: {reason}")]
    Delivery {
        transport: &'static str,
        reason: String,
    },

    #[error("{transport} delivery timed out after {secs}s")]
    Timeout { transport: &'static str, secs: u64 },

    #[error("{failed} of {total} notifiers failed")]
    Partial { failed: usize, total: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
