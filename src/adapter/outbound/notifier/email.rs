//! SMTP e-mail notifier.
//!
//! Sends each alert as a plain-text message through a STARTTLS relay.
//! Requires the `email` feature.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use super::format::{body, subject};
use crate::error::NotifyError;
use crate::port::{Alert, Notifier};

const TRANSPORT: &str = "email";

/// Environment variable holding the SMTP password.
pub const PASSWORD_ENV: &str = "INSIDERWATCH_SMTP_PASSWORD";

/// Runtime configuration for the e-mail notifier.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP submission port (STARTTLS).
    pub smtp_port: u16,
    /// Sender address, also used as the SMTP login.
    pub sender: String,
    /// Recipient address.
    pub recipient: String,
    /// SMTP password (app password for most providers).
    pub password: String,
    /// Upper bound for one delivery, in seconds.
    pub timeout_seconds: u64,
}

impl EmailConfig {
    /// Read the password from the environment.
    ///
    /// Returns `None` when `INSIDERWATCH_SMTP_PASSWORD` is unset or empty.
    #[must_use]
    pub fn password_from_env() -> Option<String> {
        std::env::var(PASSWORD_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
    }
}

/// Notifier delivering alerts over SMTP.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

fn mailbox(field: &str, address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::NotConfigured {
            transport: TRANSPORT,
            reason: format!("invalid {field} address '{address}': {e}"),
        })
}

impl EmailNotifier {
    /// Build the SMTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotConfigured`] when an address is malformed or
    /// the relay host is rejected.
    pub fn new(config: EmailConfig) -> Result<Self, NotifyError> {
        let from = mailbox("sender", &config.sender)?;
        let to = mailbox("recipient", &config.recipient)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| NotifyError::NotConfigured {
                transport: TRANSPORT,
                reason: e.to_string(),
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(config.sender.clone(), config.password))
            .timeout(Some(Duration::from_secs(config.timeout_seconds)))
            .build();

        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            recipient = %config.recipient,
            "E-mail notifier ready"
        );

        Ok(Self { transport, from, to })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn name(&self) -> &'static str {
        TRANSPORT
    }

    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject(alert))
            .header(ContentType::TEXT_PLAIN)
            .body(body(alert))
            .map_err(|e| NotifyError::Message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Delivery {
                transport: TRANSPORT,
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
