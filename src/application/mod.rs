//! Application services.
//!
//! Orchestrates the polling pipeline on top of the domain rules and the
//! outbound ports:
//!
//! - [`cycle`]: one fetch-filter-evaluate pass
//! - [`dedup`]: seen-set admission
//! - [`enrich`]: failure-absorbing market-cap lookups
//! - [`scheduler`]: fixed-delay loop around the cycle runner

pub mod cycle;
pub mod dedup;
pub mod enrich;
pub mod scheduler;

pub use cycle::{CyclePhase, CycleRunner, CycleSummary};
pub use dedup::Deduplicator;
pub use enrich::{Enricher, MarketCapSample};
pub use scheduler::Scheduler;
