//! Telegram notification configuration.
//!
//! The bot token and chat ID are secrets and come from `TELEGRAM_BOT_TOKEN`
//! and `TELEGRAM_CHAT_ID`, never from the config file.

use serde::Deserialize;

/// Telegram notification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
    /// Upper bound for one message delivery (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

const fn default_timeout_seconds() -> u64 {
    10
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
