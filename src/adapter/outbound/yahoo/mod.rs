//! Yahoo Finance market-data adapter.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::YahooMarketData;
pub use settings::MarketDataConfig;
