use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use insiderwatch::error::NotifyError;
use insiderwatch::port::{Alert, Notifier};

/// Thread-safe alert collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().len()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    pub fn tickers(&self) -> Vec<String> {
        self.alerts
            .lock()
            .iter()
            .map(|a| a.record.ticker.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        self.alerts.lock().push(alert.clone());
        Ok(())
    }
}

/// Notifier that counts attempts and always fails.
#[derive(Clone, Default)]
pub struct FailingNotifier {
    attempts: Arc<Mutex<usize>>,
}

impl FailingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn notify(&self, _alert: &Alert) -> Result<(), NotifyError> {
        *self.attempts.lock() += 1;
        Err(NotifyError::Delivery {
            transport: "failing",
            reason: "smtp rejected credentials".into(),
        })
    }
}
