use std::fs;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use insiderwatch::domain::{OwnershipType, PolicyPreset, Predicate};
use insiderwatch::error::{ConfigError, Error};
use insiderwatch::infrastructure::config::logging::LogFormat;
use insiderwatch::infrastructure::config::settings::Config;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(contents: &str) -> Result<Config, Error> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_temp_config(&dir, contents);
    Config::load(&path)
}

#[test]
fn empty_file_uses_defaults() {
    let config = load("").expect("empty config is valid");

    assert_eq!(config.source.url, "https://www.dataroma.com/m/ins/ins.php");
    assert_eq!(config.source.table_marker, "Filing");
    assert_eq!(config.source.fetch_timeout_seconds, 20);
    assert_eq!(config.schedule.poll_interval_seconds, 900);
    assert_eq!(config.email.smtp_host, "smtp.gmail.com");
    assert_eq!(config.email.smtp_port, 587);
    assert!(!config.email.enabled);
    assert!(!config.telegram.enabled);
    assert!(!config.dry_run);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.policy.preset, PolicyPreset::Impact);

    let policy = config.policy();
    assert_eq!(policy.min_invest_absolute, dec!(2_000_000));
    assert_eq!(policy.whale_threshold, dec!(20_000_000));
}

#[test]
fn full_config_round_trips_into_policy() {
    let toml = r#"
dry_run = true

[source]
url = "https://example.com/insiders"
table_marker = "Filed"
fetch_timeout_seconds = 5

[market_data]
quote_url = "https://example.com/quote"
timeout_seconds = 3

[policy]
preset = "cfo-direct"
min_invest_absolute = 250000
max_reporting_lag_days = 2
role_markers = ["CFO", "Treasurer"]
strict_ownership = "direct"

[schedule]
poll_interval_seconds = 60

[email]
enabled = true
sender = "bot@example.com"
recipient = "me@example.com"

[logging]
level = "debug"
format = "json"
"#;

    let config = load(toml).expect("valid config");
    let policy = config.policy();

    assert!(config.dry_run);
    assert_eq!(config.source.table_marker, "Filed");
    assert_eq!(config.schedule.poll_interval_seconds, 60);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(policy.predicates, vec![Predicate::StrictCompliance]);
    assert_eq!(policy.min_invest_absolute, dec!(250000));
    assert_eq!(policy.max_reporting_lag_days, 2);
    assert_eq!(policy.role_markers, vec!["CFO", "Treasurer"]);
    assert_eq!(policy.strict_ownership, OwnershipType::Direct);
}

#[test]
fn config_rejects_zero_poll_interval() {
    let result = load(
        r#"
[schedule]
poll_interval_seconds = 0
"#,
    );

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "schedule.poll_interval_seconds",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid interval error, got {err}"),
        Ok(config) => panic!(
            "Expected zero interval to be rejected, got {}",
            config.schedule.poll_interval_seconds
        ),
    }
}

#[test]
fn config_rejects_negative_threshold() {
    let result = load(
        r#"
[policy]
min_relative_impact_pct = -0.5
"#,
    );

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "policy.min_relative_impact_pct",
            ..
        }))
    ));
}

#[test]
fn config_rejects_empty_predicate_list() {
    let result = load(
        r#"
[policy]
predicates = []
"#,
    );

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "policy.predicates",
            ..
        }))
    ));
}

#[test]
fn config_rejects_role_predicates_without_markers() {
    let result = load(
        r#"
[policy]
preset = "cfo-direct"
role_markers = []
"#,
    );

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "policy.role_markers",
            ..
        }))
    ));
}

#[test]
fn config_rejects_non_http_source() {
    let result = load(
        r#"
[source]
url = "ftp://example.com/ins"
"#,
    );

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "source.url",
            ..
        }))
    ));
}

#[test]
fn enabled_email_requires_recipient() {
    let result = load(
        r#"
[email]
enabled = true
sender = "bot@example.com"
"#,
    );

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField {
            field: "email.recipient"
        }))
    ));
}

#[test]
fn unknown_preset_is_a_parse_error() {
    let result = load(
        r#"
[policy]
preset = "yolo"
"#,
    );

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}
