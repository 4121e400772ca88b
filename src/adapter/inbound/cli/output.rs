//! Terminal output for CLI commands.
//!
//! Human-readable lines with colored status symbols, or one JSON object per
//! line with `--json`. `--quiet` suppresses everything except warnings and
//! errors.

use std::fmt::Display;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::json;

use crate::application::CycleSummary;
use crate::domain::TradeRecord;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

static OUTPUT_CONFIG: RwLock<OutputConfig> = parking_lot::const_rwlock(OutputConfig {
    json: false,
    quiet: false,
});

fn read_config() -> OutputConfig {
    *OUTPUT_CONFIG.read()
}

fn suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *OUTPUT_CONFIG.write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json {
        emit_json_line(
            "header",
            json!({
                "app": "insiderwatch",
                "version": version,
            }),
        );
        return;
    }
    if suppressed(config) {
        return;
    }

    println!("{} {}", "insiderwatch".bold(), version.dimmed());
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if suppressed(config) {
        return;
    }

    println!("  {:<14} {}", label.dimmed(), value);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.bold());
}

pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if suppressed(config) {
        return;
    }

    println!("  {} {}", "✓".green(), message);
}

pub fn warning(message: &str) {
    if is_json() {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "⚠".yellow(), message);
}

pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}

/// One candidate row from `check source`.
pub fn record(record: &TradeRecord) {
    let config = read_config();
    let filed = record
        .filing_date
        .map_or_else(|| "-".to_string(), |d| d.to_string());

    if config.json {
        emit_json_line(
            "record",
            json!({
                "ticker": record.ticker,
                "buyer": record.buyer_name,
                "title": record.title,
                "ownership": record.ownership_type.as_str(),
                "filed": filed,
                "amount": record.invested_amount.to_string(),
            }),
        );
        return;
    }
    if suppressed(config) {
        return;
    }

    println!(
        "  {:<8} {:>16} {} {} {}",
        record.ticker.cyan(),
        record.invested_amount.round_dp(0).to_string(),
        filed.dimmed(),
        record.buyer_name,
        record.title.dimmed()
    );
}

/// Counts from one cycle.
pub fn summary(summary: &CycleSummary) {
    let config = read_config();

    if config.json {
        emit_json_line(
            "summary",
            json!({
                "fetch_failed": summary.fetch_failed,
                "rows": summary.rows_fetched,
                "candidates": summary.candidates,
                "already_seen": summary.already_seen,
                "evaluated": summary.evaluated,
                "qualified": summary.qualified,
                "notified": summary.notified,
                "notify_failed": summary.notify_failed,
                "market_cap_unavailable": summary.market_cap_unavailable,
                "row_failures": summary.row_failures,
            }),
        );
        return;
    }
    if suppressed(config) {
        return;
    }

    section("Cycle");
    field("Rows", summary.rows_fetched);
    field("Candidates", summary.candidates);
    field("Qualified", summary.qualified.green());
    field("Notified", summary.notified);
    if summary.notify_failed > 0 {
        field("Failed", summary.notify_failed.red());
    }
    if summary.row_failures > 0 {
        field("Row errors", summary.row_failures.red());
    }
}
