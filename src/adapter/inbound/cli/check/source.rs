use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::domain::RecordNormalizer;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_source;
use crate::infrastructure::config::settings::Config;

/// Fetch the disclosure table once and list the rows above the pre-filter.
///
/// Nothing is classified, marked seen or sent.
pub async fn execute_source<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let policy = config.policy();
    let source = build_source(&config)?;

    output::section("Source Check");
    output::field("URL", &config.source.url);

    let table = source.fetch_table().await?;
    output::success(&format!("Fetched {} rows", table.len()));
    output::field("Columns", table.headers().join(" | "));

    let normalizer = RecordNormalizer::for_table(&table);
    if normalizer.columns().money_column().is_none() {
        output::warning("No amount column recognised; every row would be filtered out");
    }
    if normalizer.columns().lacks_ticker() {
        output::warning("No ticker column recognised; market cap lookups would be skipped");
    }

    let candidates: Vec<_> = table
        .rows()
        .iter()
        .map(|row| normalizer.normalize(row))
        .filter(|record| policy.passes_prefilter(record.invested_amount))
        .collect();

    output::section(&format!(
        "Candidates above ${} ({})",
        policy.min_invest_absolute,
        candidates.len()
    ));
    for record in &candidates {
        output::record(record);
    }

    Ok(())
}
