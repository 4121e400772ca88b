//! Parse-or-default helpers for loosely formatted source cells.
//!
//! The source table is free text. Rather than failing, every helper here
//! returns a [`Parsed`] value carrying both the (possibly defaulted) result and
//! a flag recording whether the input was actually understood.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A parsed value plus whether the input was well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// The parsed value, or the default when parsing failed.
    pub value: T,
    /// True when the input parsed cleanly.
    pub valid: bool,
}

impl<T> Parsed<T> {
    /// A successfully parsed value.
    pub const fn ok(value: T) -> Self {
        Self { value, valid: true }
    }

    /// A default substituted for unparsable or missing input.
    pub const fn fallback(value: T) -> Self {
        Self {
            value,
            valid: false,
        }
    }
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a date cell with a tolerant set of layouts.
///
/// Trailing time-of-day components (`"12 Jan 2024 04:05 pm"`) are ignored.
/// Absent or unparsable input yields `None`; it never defaults to today.
#[must_use]
pub fn parse_date(raw: Option<&str>) -> Parsed<Option<NaiveDate>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Parsed::fallback(None);
    };

    if let Some(date) = parse_exact(raw) {
        return Parsed::ok(Some(date));
    }

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    for len in (1..tokens.len()).rev() {
        if let Some(date) = parse_exact(&tokens[..len].join(" ")) {
            return Parsed::ok(Some(date));
        }
    }

    Parsed::fallback(None)
}

fn parse_exact(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
