//! Classification outcomes.

use std::fmt;

use rust_decimal::Decimal;

/// Why a trade qualified. One tag per fired predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonTag {
    /// Invested amount above the absolute whale threshold.
    Whale,
    /// Impact percentage above the general impact threshold.
    Impact { threshold_pct: Decimal },
    /// Finance officer buying with impact above the role threshold.
    CfoInsider,
    /// Finance officer buying directly and reporting promptly.
    CfoDirect,
}

impl fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whale => f.write_str("WHALE"),
            Self::Impact { threshold_pct } => {
                write!(f, "IMPACT (>{}%)", threshold_pct.normalize())
            }
            Self::CfoInsider => f.write_str("CFO INSIDER"),
            Self::CfoDirect => f.write_str("CFO DIRECT"),
        }
    }
}

/// Result of classifying one trade.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verdict {
    /// True when at least one predicate fired.
    pub qualifies: bool,
    /// Fired predicates in evaluation order, without duplicates.
    pub reasons: Vec<ReasonTag>,
    /// Invested amount as a percentage of market cap; zero when the cap is
    /// unknown. Unrounded.
    pub impact_pct: Decimal,
    /// Filing lag in whole days, when both dates are known.
    pub reporting_lag_days: Option<i64>,
}

impl Verdict {
    /// Record a fired predicate.
    pub(crate) fn fire(&mut self, tag: ReasonTag) {
        if !self.reasons.contains(&tag) {
            self.reasons.push(tag);
        }
        self.qualifies = true;
    }

    /// Reason tags joined for display (`"WHALE, CFO INSIDER"`).
    #[must_use]
    pub fn reason_summary(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
