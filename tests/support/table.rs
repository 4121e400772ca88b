use insiderwatch::domain::RawTable;

/// Column layout of the insider page.
pub const HEADERS: [&str; 8] = [
    "Filing Date",
    "Symbol",
    "Security",
    "Reporting Name",
    "Title",
    "Trans Date",
    "D/I",
    "Value ($)",
];

/// A disclosure row in [`HEADERS`] order.
#[derive(Clone)]
pub struct Row {
    pub filed: &'static str,
    pub ticker: &'static str,
    pub company: &'static str,
    pub buyer: &'static str,
    pub title: &'static str,
    pub traded: &'static str,
    pub ownership: &'static str,
    pub value: &'static str,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            filed: "2024-01-01",
            ticker: "ABC",
            company: "ABC Corp",
            buyer: "Jane Doe",
            title: "Dir",
            traded: "2024-01-01",
            ownership: "D",
            value: "$25,000,000",
        }
    }
}

impl Row {
    fn cells(&self) -> Vec<&'static str> {
        vec![
            self.filed,
            self.ticker,
            self.company,
            self.buyer,
            self.title,
            self.traded,
            self.ownership,
            self.value,
        ]
    }
}

/// Build a table with [`HEADERS`] from rows.
pub fn table(rows: &[Row]) -> RawTable {
    let cells: Vec<Vec<&str>> = rows.iter().map(Row::cells).collect();
    let slices: Vec<&[&str]> = cells.iter().map(Vec::as_slice).collect();
    RawTable::from_cells(&HEADERS, &slices)
}
