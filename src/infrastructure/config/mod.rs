//! Infrastructure configuration modules.

pub mod email;
pub mod logging;
pub mod policy;
pub mod schedule;
pub mod settings;
pub mod telegram;

pub use settings::Config;
