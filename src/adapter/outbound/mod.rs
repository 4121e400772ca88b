//! Outbound adapters (driven side).

pub mod dataroma;
pub mod memory;
pub mod notifier;
pub mod yahoo;
