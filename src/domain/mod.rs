//! Source-agnostic domain logic: records, normalization and classification.

pub mod money;
pub mod normalize;
pub mod parse;
pub mod policy;
pub mod table;
pub mod trade;
pub mod verdict;

pub use money::{parse_money, Amount, MarketCap};
pub use normalize::{ColumnMap, RecordNormalizer};
pub use parse::{parse_date, Parsed};
pub use policy::{classify, impact_pct, Policy, PolicyPreset, Predicate};
pub use table::{RawRow, RawTable};
pub use trade::{OwnershipType, TradeIdentity, TradeRecord};
pub use verdict::{ReasonTag, Verdict};
