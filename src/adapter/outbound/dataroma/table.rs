//! HTML table extraction.

use scraper::{ElementRef, Html, Selector};

use crate::domain::{RawRow, RawTable};
use crate::error::FetchError;

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Collapse an element's text into single-spaced, trimmed form.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The nearest enclosing `<table>` of an element.
fn owning_table(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
}

/// Direct `<th>`/`<td>` children of a row.
fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| matches!(e.value().name(), "th" | "td"))
        .collect()
}

/// Extract the first table whose header row mentions `marker`.
///
/// Layout tables (tables whose cells contain other tables) are skipped so the
/// innermost data table wins. The header row is the first row with `<th>`
/// cells, or the first row when the table has none. Later rows without any
/// `<td>` are ignored.
///
/// # Errors
///
/// [`FetchError::TableNotFound`] when no table matches.
pub fn extract_table(html: &str, marker: &str) -> Result<RawTable, FetchError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;

    for table in document.select(&table_sel) {
        let rows: Vec<ElementRef<'_>> = table
            .select(&row_sel)
            .filter(|row| owning_table(*row) == Some(table))
            .collect();

        let nested = rows
            .iter()
            .flat_map(|row| row_cells(*row))
            .any(|cell| cell.select(&table_sel).next().is_some());
        if nested || rows.is_empty() {
            continue;
        }

        let header_idx = rows
            .iter()
            .position(|row| row_cells(*row).iter().any(|c| c.value().name() == "th"))
            .unwrap_or(0);
        let headers: Vec<String> = row_cells(rows[header_idx])
            .into_iter()
            .map(cell_text)
            .collect();
        if !headers.iter().any(|h| h.contains(marker)) {
            continue;
        }

        let data = rows[header_idx + 1..]
            .iter()
            .map(|row| row_cells(*row))
            .filter(|cells| cells.iter().any(|c| c.value().name() == "td"))
            .map(|cells| RawRow::new(cells.into_iter().map(cell_text).collect()))
            .collect();

        return Ok(RawTable::new(headers, data));
    }

    Err(FetchError::TableNotFound {
        marker: marker.to_string(),
    })
}
