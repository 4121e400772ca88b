//! Row normalization: raw table rows into [`TradeRecord`]s.
//!
//! Column names on the source page drift over time (synonyms, sort arrows,
//! optional columns). Each logical field therefore carries an ordered list of
//! accepted header synonyms. The list is resolved once per table into a
//! [`ColumnMap`], after which [`RecordNormalizer::normalize`] is a cheap,
//! total function of a single row.

use super::money::parse_money;
use super::parse::parse_date;
use super::table::{RawRow, RawTable};
use super::trade::{OwnershipType, TradeRecord};

const TICKER: &[&str] = &["Symbol", "Ticker"];
const COMPANY: &[&str] = &["Security", "Company", "Issuer", "Company Name"];
const BUYER: &[&str] = &["Reporting Name", "Insider", "Reporting Owner", "Name", "Buyer"];
const TITLE: &[&str] = &["Title", "Relationship", "Position", "Role"];
const OWNERSHIP: &[&str] = &["D/I", "Ownership", "Direct/Indirect"];
const FILING_DATE: &[&str] = &["Filing Date", "Filing", "Date", "Filed"];
const TRANSACTION_DATE: &[&str] = &["Trans Date", "Transaction Date", "Trade Date"];

/// Substrings identifying the money column.
const MONEY_MARKERS: &[&str] = &["Value", "Amount"];

/// Column indices per logical field, in synonym priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    ticker: Vec<usize>,
    company: Vec<usize>,
    buyer: Vec<usize>,
    title: Vec<usize>,
    ownership: Vec<usize>,
    filing_date: Vec<usize>,
    transaction_date: Vec<usize>,
    money: Option<usize>,
}

impl ColumnMap {
    /// Resolve every field's synonyms against a header list.
    #[must_use]
    pub fn resolve(headers: &[String]) -> Self {
        let money = headers
            .iter()
            .position(|h| MONEY_MARKERS.iter().any(|m| h.contains(m)));

        Self {
            ticker: find_columns(headers, TICKER),
            company: find_columns(headers, COMPANY),
            buyer: find_columns(headers, BUYER),
            title: find_columns(headers, TITLE),
            ownership: find_columns(headers, OWNERSHIP),
            filing_date: find_columns(headers, FILING_DATE),
            transaction_date: find_columns(headers, TRANSACTION_DATE),
            money,
        }
    }

    /// Index of the money column, if the table has one.
    #[must_use]
    pub fn money_column(&self) -> Option<usize> {
        self.money
    }

    /// True when no ticker column was found.
    #[must_use]
    pub fn lacks_ticker(&self) -> bool {
        self.ticker.is_empty()
    }
}

fn find_columns(headers: &[String], synonyms: &[&str]) -> Vec<usize> {
    synonyms
        .iter()
        .filter_map(|name| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
        .collect()
}

/// First non-null cell among the candidate columns.
fn first_present<'a>(row: &'a RawRow, columns: &[usize]) -> Option<&'a str> {
    columns.iter().find_map(|&idx| row.cell(idx))
}

fn text(row: &RawRow, columns: &[usize]) -> String {
    first_present(row, columns).unwrap_or_default().to_string()
}

/// Turns raw rows into trade records using a resolved [`ColumnMap`].
#[derive(Debug, Clone, Default)]
pub struct RecordNormalizer {
    columns: ColumnMap,
}

impl RecordNormalizer {
    #[must_use]
    pub fn new(columns: ColumnMap) -> Self {
        Self { columns }
    }

    /// Resolve the column map for a table.
    #[must_use]
    pub fn for_table(table: &RawTable) -> Self {
        Self::new(ColumnMap::resolve(table.headers()))
    }

    #[must_use]
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Normalize one row. Never fails: missing or malformed cells degrade to
    /// empty strings, absent dates, zero amounts and unknown ownership.
    #[must_use]
    pub fn normalize(&self, row: &RawRow) -> TradeRecord {
        let c = &self.columns;
        let amount = parse_money(c.money.and_then(|idx| row.cell(idx)));
        let ownership = first_present(row, &c.ownership)
            .map_or(OwnershipType::Unknown, OwnershipType::from_marker);
        let filing = first_present(row, &c.filing_date);

        TradeRecord {
            ticker: text(row, &c.ticker).to_ascii_uppercase(),
            company_name: text(row, &c.company),
            buyer_name: text(row, &c.buyer),
            filing_date: parse_date(filing).value,
            filing_text: filing.map(str::trim).unwrap_or_default().to_string(),
            transaction_date: parse_date(first_present(row, &c.transaction_date)).value,
            invested_amount: amount.value,
            title: text(row, &c.title),
            ownership_type: ownership,
        }
    }
}
