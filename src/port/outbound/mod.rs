//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the external collaborators of the pipeline: the
//! disclosure page, market data, the seen-trade memory and notifications.

pub mod market_data;
pub mod notifier;
pub mod source;
pub mod store;
