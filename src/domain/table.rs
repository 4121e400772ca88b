//! Raw, loosely-structured disclosure tables.
//!
//! A [`RawTable`] is what the source adapter scrapes out of the HTML page:
//! cleaned header names plus rows of cell text. Nothing about the column set
//! is guaranteed; [`super::normalize`] is responsible for making sense of it.

/// Sort glyphs the source decorates its column headers with.
const HEADER_GLYPHS: [char; 4] = ['▲', '▼', '↑', '↓'];

/// Cell contents treated as an empty value.
const NULL_MARKERS: [&str; 5] = ["nan", "none", "n/a", "-", "--"];

/// Remove sort glyphs and surrounding whitespace from a header.
#[must_use]
pub fn clean_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| !HEADER_GLYPHS.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// One data row of the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<String>,
}

impl RawRow {
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Non-null cell text at `index`, trimmed.
    ///
    /// Missing cells, blank cells and placeholder values such as `"N/A"`
    /// read as `None`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        let value = self.cells.get(index)?.trim();
        if value.is_empty() || NULL_MARKERS.iter().any(|m| value.eq_ignore_ascii_case(m)) {
            return None;
        }
        Some(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Header names plus data rows, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<RawRow>,
}

impl RawTable {
    /// Build a table, cleaning every header.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self {
            headers: headers.iter().map(|h| clean_header(h)).collect(),
            rows,
        }
    }

    /// Build a table from string slices. Handy for fixtures.
    #[must_use]
    pub fn from_cells(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| RawRow::new(row.iter().map(|c| (*c).to_string()).collect()))
                .collect(),
        )
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
