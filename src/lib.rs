//! insiderwatch - insider-trading disclosure monitor.
//!
//! Periodically scrapes a public table of insider purchases, decides which
//! ones are material and sends each qualifying trade exactly once.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Pure rules: table normalization, trade identity and the
//!   policy-driven classifier
//! - **`port`** - Traits for the outside world (source, market data, seen
//!   store, notifiers)
//! - **`adapter`** - Implementations: Dataroma scraper, Yahoo quotes, SMTP,
//!   Telegram, in-memory seen set, CLI
//! - **`application`** - Cycle runner, deduplicator, enricher and scheduler
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Pipeline
//!
//! ```text
//! fetch table -> normalize -> pre-filter -> dedup -> enrich -> classify -> notify -> mark seen
//! ```
//!
//! # Features
//!
//! - `email` - SMTP notifications via `lettre` (default)
//! - `telegram` - Telegram notifications via `teloxide` (default)
//!
//! # Example
//!
//! ```
//! use insiderwatch::domain::{classify, Policy, RawTable, RecordNormalizer};
//!
//! let table = RawTable::from_cells(
//!     &["Symbol", "Reporting Name", "Filing", "Value ($)"],
//!     &[&["ABC", "Jane Doe", "2024-01-01", "$25,000,000"]],
//! );
//! let normalizer = RecordNormalizer::for_table(&table);
//! let record = normalizer.normalize(&table.rows()[0]);
//!
//! let verdict = classify(&record, None, &Policy::default());
//! assert!(verdict.qualifies);
//! assert_eq!(verdict.reason_summary(), "WHALE");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
