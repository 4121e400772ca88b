//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::adapter::outbound::dataroma::DataromaSource;
use crate::adapter::outbound::memory::MemorySeenStore;
#[cfg(feature = "email")]
use crate::adapter::outbound::notifier::email::{EmailConfig, EmailNotifier, PASSWORD_ENV};
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::yahoo::YahooMarketData;
use crate::application::{CycleRunner, Deduplicator, Enricher};
use crate::domain::MarketCap;
#[cfg(feature = "email")]
use crate::error::ConfigError;
use crate::error::{EnrichmentError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::{DisclosureSource, LogNotifier, MarketCapProvider, NotifierRegistry};

/// Build the disclosure source from `[source]`.
pub(crate) fn build_source(config: &Config) -> Result<Arc<dyn DisclosureSource>> {
    let source = DataromaSource::from_config(config.source.clone())?;
    Ok(Arc::new(source))
}

/// Build the enricher from `[market_data]`.
///
/// A provider that cannot be constructed degrades to "no market cap" for the
/// whole run rather than aborting startup.
pub(crate) fn build_enricher(config: &Config) -> Enricher {
    let timeout = Duration::from_secs(config.market_data.timeout_seconds);
    let provider: Arc<dyn MarketCapProvider> =
        match YahooMarketData::from_config(&config.market_data) {
            Ok(provider) => Arc::new(provider),
            Err(e) => {
                warn!(error = %e, "Market data client unavailable, relative impact disabled");
                Arc::new(NoMarketData)
            }
        };
    Enricher::new(provider, timeout)
}

struct NoMarketData;

#[async_trait]
impl MarketCapProvider for NoMarketData {
    async fn market_cap(
        &self,
        _ticker: &str,
    ) -> std::result::Result<Option<MarketCap>, EnrichmentError> {
        Ok(None)
    }
}

/// Build notifier registry from configuration.
///
/// The log transport is always registered. E-mail and Telegram are added
/// when enabled in the config and compiled in.
pub(crate) fn build_notifier_registry(config: &Config) -> Result<NotifierRegistry> {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    if config.email.enabled {
        register_email(config, &mut registry)?;
    }

    if config.telegram.enabled {
        register_telegram(config, &mut registry);
    }

    Ok(registry)
}

#[cfg(feature = "email")]
fn register_email(config: &Config, registry: &mut NotifierRegistry) -> Result<()> {
    let password = EmailConfig::password_from_env().ok_or(ConfigError::MissingField {
        field: PASSWORD_ENV,
    })?;
    let email = &config.email;
    let notifier = EmailNotifier::new(EmailConfig {
        smtp_host: email.smtp_host.clone(),
        smtp_port: email.smtp_port,
        sender: email.sender.clone(),
        recipient: email.recipient.clone(),
        password,
        timeout_seconds: email.timeout_seconds,
    })?;
    registry.register(Box::new(notifier));
    info!("E-mail notifier enabled");
    Ok(())
}

#[cfg(not(feature = "email"))]
fn register_email(_config: &Config, _registry: &mut NotifierRegistry) -> Result<()> {
    warn!("E-mail enabled in config but the binary was built without the `email` feature");
    Ok(())
}

#[cfg(feature = "telegram")]
fn register_telegram(config: &Config, registry: &mut NotifierRegistry) {
    if let Some(tg_config) = TelegramConfig::from_env() {
        let tg_config = TelegramConfig {
            timeout_seconds: config.telegram.timeout_seconds,
            ..tg_config
        };
        registry.register(Box::new(TelegramNotifier::new(tg_config)));
        info!("Telegram notifier enabled");
    } else {
        warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set");
    }
}

#[cfg(not(feature = "telegram"))]
fn register_telegram(_config: &Config, _registry: &mut NotifierRegistry) {
    warn!("Telegram enabled in config but the binary was built without the `telegram` feature");
}

/// Wire a cycle runner with a fresh in-memory seen set.
pub fn build_cycle_runner(config: &Config) -> Result<CycleRunner> {
    let source = build_source(config)?;
    let enricher = build_enricher(config);
    let notifiers = Arc::new(build_notifier_registry(config)?);
    info!(notifiers = ?notifiers.names(), "Notifiers initialized");

    let dedup = Deduplicator::new(Arc::new(MemorySeenStore::new()));
    let runner = CycleRunner::new(source, dedup, enricher, notifiers, config.policy());
    Ok(runner.with_dry_run(config.dry_run))
}
