//! Monetary types and tolerant money parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::parse::Parsed;

/// Dollar amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Market capitalization in dollars.
pub type MarketCap = Decimal;

/// Characters removed from money cells before parsing.
const MONEY_NOISE: [char; 2] = ['$', ','];

/// Parse a money cell such as `"$25,000,000"`.
///
/// Currency symbols, thousands separators and whitespace are stripped. Any
/// non-numeric residue, a negative value or an empty cell yields zero with the
/// validity flag cleared.
#[must_use]
pub fn parse_money(raw: Option<&str>) -> Parsed<Amount> {
    let Some(raw) = raw else {
        return Parsed::fallback(Decimal::ZERO);
    };

    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !MONEY_NOISE.contains(c) && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Parsed::fallback(Decimal::ZERO);
    }

    let parsed = Decimal::from_str(&cleaned).or_else(|_| Decimal::from_scientific(&cleaned));
    match parsed {
        Ok(value) if value >= Decimal::ZERO => Parsed::ok(value.normalize()),
        _ => Parsed::fallback(Decimal::ZERO),
    }
}
