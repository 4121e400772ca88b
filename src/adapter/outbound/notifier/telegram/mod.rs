//! Telegram notification.
//!
//! Sends each alert as a `MarkdownV2` message to a single chat.

mod format;

pub mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};
