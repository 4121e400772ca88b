//! Dataroma insider-trading page adapter.
//!
//! Fetches `ins.php` over HTTP and scrapes its disclosure table into a
//! [`crate::domain::RawTable`].

pub mod client;
pub mod settings;
pub mod table;

pub use client::DataromaSource;
pub use settings::SourceConfig;
