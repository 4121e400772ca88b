//! Alert policy configuration.
//!
//! A preset supplies every threshold; individual fields override it.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{OwnershipType, Policy, PolicyPreset, Predicate};

/// `[policy]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    /// Base preset (default: `impact`).
    #[serde(default)]
    pub preset: PolicyPreset,
    /// Enabled predicates, replacing the preset's list.
    #[serde(default)]
    pub predicates: Option<Vec<Predicate>>,
    /// Dollar floor for the pre-filter.
    #[serde(default)]
    pub min_invest_absolute: Option<Decimal>,
    /// Dollar threshold for the whale predicate.
    #[serde(default)]
    pub whale_threshold: Option<Decimal>,
    /// Percentage floor for the relative-impact predicate.
    #[serde(default)]
    pub min_relative_impact_pct: Option<Decimal>,
    /// Lower percentage floor when the role matches.
    #[serde(default)]
    pub cfo_relative_impact_pct: Option<Decimal>,
    /// Inclusive maximum filing lag in days.
    #[serde(default)]
    pub max_reporting_lag_days: Option<i64>,
    /// Role substrings, matched case-insensitively.
    #[serde(default)]
    pub role_markers: Option<Vec<String>>,
    /// Ownership required by strict compliance.
    #[serde(default)]
    pub strict_ownership: Option<OwnershipType>,
}

impl PolicyConfig {
    /// Resolve the preset and apply overrides.
    #[must_use]
    pub fn to_policy(&self) -> Policy {
        let mut policy = Policy::preset(self.preset);
        if let Some(predicates) = &self.predicates {
            policy.predicates = predicates.clone();
        }
        if let Some(v) = self.min_invest_absolute {
            policy.min_invest_absolute = v;
        }
        if let Some(v) = self.whale_threshold {
            policy.whale_threshold = v;
        }
        if let Some(v) = self.min_relative_impact_pct {
            policy.min_relative_impact_pct = v;
        }
        if let Some(v) = self.cfo_relative_impact_pct {
            policy.cfo_relative_impact_pct = v;
        }
        if let Some(v) = self.max_reporting_lag_days {
            policy.max_reporting_lag_days = v;
        }
        if let Some(markers) = &self.role_markers {
            policy.role_markers = markers.clone();
        }
        if let Some(v) = self.strict_ownership {
            policy.strict_ownership = v;
        }
        policy
    }
}

impl From<&PolicyConfig> for Policy {
    fn from(config: &PolicyConfig) -> Self {
        config.to_policy()
    }
}
