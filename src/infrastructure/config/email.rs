//! SMTP notification configuration.
//!
//! The password is read from `INSIDERWATCH_SMTP_PASSWORD` at startup.

use serde::Deserialize;

/// E-mail notification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailAppConfig {
    /// Enable e-mail notifications.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host (default: smtp.gmail.com).
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// STARTTLS submission port (default: 587).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Sender address, also the SMTP login.
    #[serde(default)]
    pub sender: String,
    /// Recipient address.
    #[serde(default)]
    pub recipient: String,
    /// Upper bound for one delivery (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".into()
}

const fn default_smtp_port() -> u16 {
    587
}

const fn default_timeout_seconds() -> u64 {
    30
}

impl Default for EmailAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            sender: String::new(),
            recipient: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
