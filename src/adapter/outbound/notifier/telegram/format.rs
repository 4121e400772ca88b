//! Message formatting for Telegram notifications.

use crate::adapter::outbound::notifier::format::format_usd;
use crate::port::Alert;

/// Format an alert as a `MarkdownV2` message.
pub fn format_alert_message(alert: &Alert) -> String {
    let record = &alert.record;
    let verdict = &alert.verdict;

    let market_cap = alert.market_cap.map_or_else(
        || "unknown".to_string(),
        |cap| format!("~${}", format_usd(cap, 0)),
    );
    let filed = record
        .filing_date
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    let lag = verdict
        .reporting_lag_days
        .map_or_else(String::new, |days| format!(" (lag {days}d)"));

    format!(
        "🚨 *Insider Alert: {}*\n\
        \n\
        🏢 {}\n\
        👤 {} \\({}\\)\n\
        📅 Filed: `{}`{}\n\
        💵 Invested: `${}`\n\
        🏦 Market Cap: `{}`\n\
        📈 Impact: `{:.3}%`\n\
        🏷️ {}\n\
        \n\
        [Yahoo Finance]({})",
        escape_markdown(&record.ticker),
        escape_markdown(&truncate(&record.company_name, 60)),
        escape_markdown(&truncate(&record.buyer_name, 40)),
        escape_markdown(&truncate(&record.title, 40)),
        filed,
        escape_markdown(&lag),
        format_usd(record.invested_amount, 0),
        market_cap,
        verdict.impact_pct.round_dp(3),
        escape_markdown(&verdict.reason_summary()),
        escape_link(&alert.quote_url()),
    )
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Escape the URL part of an inline link, where only `)` and `\` are special.
fn escape_link(url: &str) -> String {
    url.replace('\\', "\\\\").replace(')', "\\)")
}
