//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets (SMTP password, Telegram
//! token) come only from environment variables.
//!
//! # Example
//!
//! ```no_run
//! use insiderwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use url::Url;

use super::email::EmailAppConfig;
use super::logging::LoggingConfig;
use super::policy::PolicyConfig;
use super::schedule::ScheduleConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::dataroma::SourceConfig;
use crate::adapter::outbound::yahoo::MarketDataConfig;
use crate::domain::{Policy, Predicate};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every table is optional; an empty file yields the defaults. Load from a
/// TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Disclosure page settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Market-cap lookup settings.
    #[serde(default)]
    pub market_data: MarketDataConfig,

    /// Thresholds and enabled predicates.
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Polling interval.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// SMTP transport.
    #[serde(default)]
    pub email: EmailAppConfig,

    /// Telegram transport.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Enable dry-run mode.
    ///
    /// When true, qualifying trades are logged but no alert is sent.
    /// Defaults to false.
    #[serde(default)]
    pub dry_run: bool,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}

fn check_http_url(field: &'static str, raw: &str) -> std::result::Result<(), ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::MissingField { field });
    }
    let url = Url::parse(raw).map_err(|e| invalid(field, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(field, "must be an http(s) URL"));
    }
    Ok(())
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// The effective classification policy (preset plus overrides).
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy.to_policy()
    }

    /// Initialize the tracing subscriber from `[logging]`.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_http_url("source.url", &self.source.url)?;
        if self.source.table_marker.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "source.table_marker",
            });
        }
        if self.source.fetch_timeout_seconds == 0 {
            return Err(invalid(
                "source.fetch_timeout_seconds",
                "must be greater than 0",
            ));
        }

        check_http_url("market_data.quote_url", &self.market_data.quote_url)?;
        if self.market_data.timeout_seconds == 0 {
            return Err(invalid(
                "market_data.timeout_seconds",
                "must be greater than 0",
            ));
        }

        if self.schedule.poll_interval_seconds == 0 {
            return Err(invalid(
                "schedule.poll_interval_seconds",
                "must be greater than 0",
            ));
        }

        let policy = self.policy();
        if policy.predicates.is_empty() {
            return Err(invalid("policy.predicates", "at least one predicate is required"));
        }
        let amounts = [
            ("policy.min_invest_absolute", policy.min_invest_absolute),
            ("policy.whale_threshold", policy.whale_threshold),
            ("policy.min_relative_impact_pct", policy.min_relative_impact_pct),
            ("policy.cfo_relative_impact_pct", policy.cfo_relative_impact_pct),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(invalid(field, "must be 0 or greater"));
            }
        }
        if policy.max_reporting_lag_days < 0 {
            return Err(invalid("policy.max_reporting_lag_days", "must be 0 or greater"));
        }
        let needs_role =
            policy.is_enabled(Predicate::RoleImpact) || policy.is_enabled(Predicate::StrictCompliance);
        if needs_role && policy.role_markers.iter().all(|m| m.trim().is_empty()) {
            return Err(invalid(
                "policy.role_markers",
                "role predicates need at least one non-empty marker",
            ));
        }

        if self.email.enabled {
            if self.email.sender.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "email.sender",
                });
            }
            if self.email.recipient.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "email.recipient",
                });
            }
            if self.email.smtp_host.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "email.smtp_host",
                });
            }
            if self.email.timeout_seconds == 0 {
                return Err(invalid("email.timeout_seconds", "must be greater than 0"));
            }
        }
        if self.telegram.enabled && self.telegram.timeout_seconds == 0 {
            return Err(invalid("telegram.timeout_seconds", "must be greater than 0"));
        }

        Ok(())
    }
}
