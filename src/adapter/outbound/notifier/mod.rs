//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the supported transports.

pub mod format;

#[cfg(feature = "email")]
pub mod email;

#[cfg(feature = "telegram")]
pub mod telegram;
