//! Polling schedule configuration.

use std::time::Duration;

use serde::Deserialize;

/// How often the source is polled.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Pause after each cycle, in seconds (default: 900).
    #[serde(default = "default_poll_interval_seconds")]
    pub poll_interval_seconds: u64,
}

const fn default_poll_interval_seconds() -> u64 {
    900
}

impl ScheduleConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: default_poll_interval_seconds(),
        }
    }
}
