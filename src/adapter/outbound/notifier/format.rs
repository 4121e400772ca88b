//! Plain-text alert rendering shared by the text transports.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::port::Alert;

/// Format a dollar amount with thousands separators (`25,000,000.00`).
#[must_use]
pub fn format_usd(amount: Decimal, decimals: u32) -> String {
    let rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

/// Subject line for an alert.
#[must_use]
pub fn subject(alert: &Alert) -> String {
    format!(
        "🚨 INSIDER ALERT: {} ({}) ${}",
        or_dash(&alert.record.ticker),
        alert.verdict.reason_summary(),
        format_usd(alert.record.invested_amount, 0)
    )
}

/// Plain-text body for an alert.
#[must_use]
pub fn body(alert: &Alert) -> String {
    let record = &alert.record;
    let verdict = &alert.verdict;
    let rule = "-".repeat(42);

    let lag = verdict
        .reporting_lag_days
        .map_or_else(String::new, |days| format!(" (lag: {days} days)"));
    let market_cap = alert
        .market_cap
        .map_or_else(|| "unknown".to_string(), |cap| format!("~${}", format_usd(cap, 2)));

    format!(
        "NEW HIGH-IMPACT INSIDER TRADE\n\
        \n\
        {rule}\n\
        Company:     {} ({})\n\
        Buyer:       {}\n\
        Role:        {}\n\
        Ownership:   {}\n\
        Transaction: {}\n\
        Filed:       {}{lag}\n\
        \n\
        Invested:    ${}\n\
        Market Cap:  {market_cap}\n\
        Impact:      {:.3}% of the company\n\
        \n\
        Signals:     {}\n\
        {rule}\n\
        \n\
        Yahoo Finance: {}",
        or_dash(&record.company_name),
        or_dash(&record.ticker),
        or_dash(&record.buyer_name),
        or_dash(&record.title),
        record.ownership_type,
        date_or_dash(record.transaction_date),
        date_or_dash(record.filing_date),
        format_usd(record.invested_amount, 2),
        verdict.impact_pct.round_dp(3),
        verdict.reason_summary(),
        alert.quote_url(),
    )
}
