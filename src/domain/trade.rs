//! Canonical insider trade records.
//!
//! - [`TradeRecord`] - One normalized disclosure row
//! - [`OwnershipType`] - Direct, indirect or unknown holding
//! - [`TradeIdentity`] - Deduplication key derived from a record
//!
//! Records are created fresh every cycle by the normalizer and never mutated
//! afterwards. Only the [`TradeIdentity`] outlives the cycle.

use std::fmt;

use chrono::NaiveDate;

use super::money::Amount;

/// How the reporting insider holds the traded securities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipType {
    /// Transacted directly in the insider's own name.
    Direct,
    /// Transacted through an intermediary entity (trust, fund, spouse).
    Indirect,
    /// Column missing or not recognized.
    #[default]
    Unknown,
}

impl OwnershipType {
    /// Map a free-text ownership marker to the enum.
    ///
    /// `"D"`/`"Direct"` and `"I"`/`"Indirect"` are recognized case-insensitively;
    /// everything else is [`OwnershipType::Unknown`].
    #[must_use]
    pub fn from_marker(raw: &str) -> Self {
        let marker = raw.trim().to_ascii_uppercase();
        match marker.as_str() {
            "D" | "DIRECT" | "(D)" => Self::Direct,
            "I" | "INDIRECT" | "(I)" => Self::Indirect,
            _ => Self::Unknown,
        }
    }

    /// Short marker used in alerts.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Indirect => "Indirect",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OwnershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One insider transaction as reported by the disclosure source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeRecord {
    /// Ticker symbol. Empty when the source row had none.
    pub ticker: String,
    /// Issuer name.
    pub company_name: String,
    /// Reporting insider.
    pub buyer_name: String,
    /// Date the disclosure was filed.
    pub filing_date: Option<NaiveDate>,
    /// Filing cell as it appeared in the source, trimmed.
    pub filing_text: String,
    /// Date the transaction took place.
    pub transaction_date: Option<NaiveDate>,
    /// Transaction value in dollars; always finite and non-negative.
    pub invested_amount: Amount,
    /// Role or position of the insider. May be empty.
    pub title: String,
    /// Direct or indirect holding.
    pub ownership_type: OwnershipType,
}

impl TradeRecord {
    /// Deduplication key for this record.
    ///
    /// A parsed filing date keys the record on its own; the raw filing text
    /// only takes part when the date could not be read.
    #[must_use]
    pub fn identity(&self) -> TradeIdentity {
        let filing_text = match self.filing_date {
            Some(_) => String::new(),
            None => self.filing_text.clone(),
        };
        TradeIdentity {
            ticker: self.ticker.clone(),
            filing_date: self.filing_date,
            filing_text,
            buyer_name: self.buyer_name.clone(),
            invested_amount: self.invested_amount.normalize(),
        }
    }

    /// Whole calendar days between the transaction and its filing.
    ///
    /// Negative when the filing predates the transaction. `None` when either
    /// date is absent.
    #[must_use]
    pub fn reporting_lag_days(&self) -> Option<i64> {
        match (self.filing_date, self.transaction_date) {
            (Some(filed), Some(traded)) => Some((filed - traded).num_days()),
            _ => None,
        }
    }
}

/// Composite key identifying a disclosure across cycles.
///
/// Two records with the same ticker, filing date, buyer and amount are treated
/// as the same disclosure, whatever their other fields say. `filing_text` is
/// empty whenever `filing_date` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeIdentity {
    pub ticker: String,
    pub filing_date: Option<NaiveDate>,
    pub filing_text: String,
    pub buyer_name: String,
    pub invested_amount: Amount,
}

impl fmt::Display for TradeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = match self.filing_date {
            Some(d) => d.to_string(),
            None if !self.filing_text.is_empty() => self.filing_text.clone(),
            None => "-".to_string(),
        };
        write!(
            f,
            "{}_{}_{}_{}",
            self.ticker, date, self.buyer_name, self.invested_amount
        )
    }
}
