use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

fn env_present(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| !v.trim().is_empty())
}

/// Validate configuration file without starting the monitor.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    let policy = config.policy();

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Policy");
    output::field("Preset", format!("{:?}", config.policy.preset));
    output::field("Predicates", format!("{:?}", policy.predicates));
    output::field("Pre-filter", format!("> ${}", policy.min_invest_absolute));
    output::field("Whale", format!("> ${}", policy.whale_threshold));
    output::field("Impact", format!("> {}%", policy.min_relative_impact_pct));
    output::field("CFO impact", format!("> {}%", policy.cfo_relative_impact_pct));
    output::field("Max lag", format!("{} days", policy.max_reporting_lag_days));
    output::field("Interval", format!("{}s", config.schedule.poll_interval_seconds));
    output::field("Dry run", config.dry_run);

    output::section("Transports");
    output::field("Log", "always on");

    if config.email.enabled {
        if !cfg!(feature = "email") {
            output::warning("E-mail enabled but this build lacks the `email` feature");
        } else if env_present("INSIDERWATCH_SMTP_PASSWORD") {
            output::success("E-mail configured");
            output::field("Recipient", &config.email.recipient);
        } else {
            output::warning("E-mail enabled but INSIDERWATCH_SMTP_PASSWORD is not set");
        }
    } else {
        output::field("E-mail", "disabled");
    }

    if config.telegram.enabled {
        let token = env_present("TELEGRAM_BOT_TOKEN");
        let chat = env_present("TELEGRAM_CHAT_ID");
        if !cfg!(feature = "telegram") {
            output::warning("Telegram enabled but this build lacks the `telegram` feature");
        } else if token && chat {
            output::success("Telegram configured");
        } else {
            output::warning("Telegram enabled but environment variables are missing");
            if !token {
                output::field("Missing", "TELEGRAM_BOT_TOKEN");
            }
            if !chat {
                output::field("Missing", "TELEGRAM_CHAT_ID");
            }
        }
    } else {
        output::field("Telegram", "disabled");
    }

    output::success("Configuration check complete");

    Ok(())
}
