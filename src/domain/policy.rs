//! Materiality, role and timing policy.
//!
//! A [`Policy`] is a bundle of thresholds plus the set of enabled
//! [`Predicate`]s. [`classify`] evaluates every enabled predicate against a
//! record and ORs them together; each predicate that fires contributes its
//! [`ReasonTag`] to the [`Verdict`].
//!
//! Two presets mirror the two ways the monitor is typically run:
//!
//! - [`PolicyPreset::Impact`] - large purchases relative to company size
//! - [`PolicyPreset::CfoDirect`] - finance officers buying directly and
//!   reporting within a day

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::money::{Amount, MarketCap};
use super::trade::{OwnershipType, TradeRecord};
use super::verdict::{ReasonTag, Verdict};

/// An independently evaluable qualification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Predicate {
    /// Invested amount above `whale_threshold`.
    Whale,
    /// Impact percentage above `min_relative_impact_pct`.
    RelativeImpact,
    /// Role match and impact above `cfo_relative_impact_pct`.
    RoleImpact,
    /// Role match, required ownership and prompt reporting.
    StrictCompliance,
}

impl Predicate {
    /// Canonical evaluation order.
    pub const ALL: [Predicate; 4] = [
        Predicate::Whale,
        Predicate::RelativeImpact,
        Predicate::RoleImpact,
        Predicate::StrictCompliance,
    ];

    /// True when the predicate needs a market cap to ever fire.
    #[must_use]
    pub const fn uses_market_cap(&self) -> bool {
        matches!(self, Self::RelativeImpact | Self::RoleImpact)
    }
}

/// Named threshold bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyPreset {
    /// Whale, impact and CFO-impact predicates.
    #[default]
    Impact,
    /// CFO + direct ownership + reporting lag predicate.
    CfoDirect,
}

/// Thresholds and enabled predicates used by [`classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Enabled predicates. Evaluation always follows [`Predicate::ALL`] order.
    pub predicates: Vec<Predicate>,
    /// Pre-filter floor: rows at or below this amount are never evaluated.
    pub min_invest_absolute: Amount,
    /// Absolute-size predicate threshold.
    pub whale_threshold: Amount,
    /// General relative-impact threshold, in percent.
    pub min_relative_impact_pct: Decimal,
    /// Relative-impact threshold when the role matches, in percent.
    pub cfo_relative_impact_pct: Decimal,
    /// Inclusive upper bound on the filing lag, in days.
    pub max_reporting_lag_days: i64,
    /// Case-insensitive substrings identifying the watched role.
    pub role_markers: Vec<String>,
    /// Ownership required by the strict-compliance predicate.
    pub strict_ownership: OwnershipType,
}

impl Policy {
    /// Build the threshold bundle for a preset.
    #[must_use]
    pub fn preset(preset: PolicyPreset) -> Self {
        let role_markers = vec!["CFO".to_string(), "Chief Financial".to_string()];
        match preset {
            PolicyPreset::Impact => Self {
                predicates: vec![
                    Predicate::Whale,
                    Predicate::RelativeImpact,
                    Predicate::RoleImpact,
                ],
                min_invest_absolute: dec!(2_000_000),
                whale_threshold: dec!(20_000_000),
                min_relative_impact_pct: dec!(0.1),
                cfo_relative_impact_pct: dec!(0.05),
                max_reporting_lag_days: 1,
                role_markers,
                strict_ownership: OwnershipType::Direct,
            },
            PolicyPreset::CfoDirect => Self {
                predicates: vec![Predicate::StrictCompliance],
                min_invest_absolute: dec!(200_000),
                whale_threshold: dec!(20_000_000),
                min_relative_impact_pct: dec!(0.1),
                cfo_relative_impact_pct: dec!(0.05),
                max_reporting_lag_days: 1,
                role_markers,
                strict_ownership: OwnershipType::Direct,
            },
        }
    }

    #[must_use]
    pub fn is_enabled(&self, predicate: Predicate) -> bool {
        self.predicates.contains(&predicate)
    }

    /// Cheap absolute-amount gate applied before any network work.
    #[must_use]
    pub fn passes_prefilter(&self, amount: Amount) -> bool {
        amount > self.min_invest_absolute
    }

    /// True when some enabled predicate depends on the market cap.
    #[must_use]
    pub fn needs_market_cap(&self) -> bool {
        self.predicates.iter().any(Predicate::uses_market_cap)
    }

    /// Role match against the title, falling back to the buyer name.
    #[must_use]
    pub fn matches_role(&self, record: &TradeRecord) -> bool {
        let haystacks = [
            record.title.to_uppercase(),
            record.buyer_name.to_uppercase(),
        ];
        self.role_markers
            .iter()
            .map(|m| m.trim().to_uppercase())
            .filter(|m| !m.is_empty())
            .any(|marker| haystacks.iter().any(|h| h.contains(&marker)))
    }

    /// Filing lag within `0..=max_reporting_lag_days`.
    ///
    /// Records missing either date are non-compliant.
    #[must_use]
    pub fn is_timely(&self, record: &TradeRecord) -> bool {
        record
            .reporting_lag_days()
            .is_some_and(|lag| (0..=self.max_reporting_lag_days).contains(&lag))
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::preset(PolicyPreset::default())
    }
}

/// Invested amount as a percentage of market cap.
///
/// Zero when the cap is unknown or non-positive.
#[must_use]
pub fn impact_pct(amount: Amount, market_cap: Option<MarketCap>) -> Decimal {
    match market_cap {
        Some(cap) if cap > Decimal::ZERO => amount
            .checked_div(cap)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Apply a policy to a record.
///
/// Deterministic and side-effect free. A missing market cap disables the
/// relative-impact predicates rather than failing.
#[must_use]
pub fn classify(record: &TradeRecord, market_cap: Option<MarketCap>, policy: &Policy) -> Verdict {
    let cap_known = market_cap.is_some_and(|cap| cap > Decimal::ZERO);
    let impact = impact_pct(record.invested_amount, market_cap);
    let mut verdict = Verdict {
        impact_pct: impact,
        reporting_lag_days: record.reporting_lag_days(),
        ..Verdict::default()
    };

    for predicate in Predicate::ALL {
        if !policy.is_enabled(predicate) {
            continue;
        }
        let fired = match predicate {
            Predicate::Whale => record.invested_amount > policy.whale_threshold,
            Predicate::RelativeImpact => cap_known && impact > policy.min_relative_impact_pct,
            Predicate::RoleImpact => {
                cap_known && policy.matches_role(record) && impact > policy.cfo_relative_impact_pct
            }
            Predicate::StrictCompliance => {
                policy.matches_role(record)
                    && record.ownership_type == policy.strict_ownership
                    && policy.is_timely(record)
            }
        };
        if fired {
            verdict.fire(tag_for(predicate, policy));
        }
    }

    verdict
}

fn tag_for(predicate: Predicate, policy: &Policy) -> ReasonTag {
    match predicate {
        Predicate::Whale => ReasonTag::Whale,
        Predicate::RelativeImpact => ReasonTag::Impact {
            threshold_pct: policy.min_relative_impact_pct,
        },
        Predicate::RoleImpact => ReasonTag::CfoInsider,
        Predicate::StrictCompliance => ReasonTag::CfoDirect,
    }
}
