use lembrete_domain::RetryPolicy;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// File the store is persisted to. The store is kept in memory only
    /// when this is not set.
    pub store_path: Option<PathBuf>,
    /// How often due `Reminder`s are looked for
    pub reminder_poll_interval: Duration,
    /// How often upcoming `ScheduledEvent`s are looked for
    pub event_poll_interval: Duration,
    /// Maximum duration of a single dispatch before it counts as failed
    pub dispatch_timeout: Duration,
    pub retry_policy: RetryPolicy,
    /// Dispatch ledgers older than this many days are removed
    pub ledger_retention_days: i64,
    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub whatsapp_api_url: String,
    /// Pretend to deliver notifications instead of calling the endpoints
    pub simulate_dispatch: bool,
    pub simulated_dispatch_latency: Duration,
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parses the env var, warning and falling back to the default when it is invalid
fn parse_env<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    let value = match optional_env(name) {
        Some(value) => value,
        None => return default,
    };
    match value.trim().parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default value: {}.",
                name, value, default
            );
            default
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let store_path = optional_env("LEMBRETE_STORE_PATH").map(PathBuf::from);
        if store_path.is_none() {
            info!("Did not find LEMBRETE_STORE_PATH environment variable. State will only be kept in memory.");
        }
        let max_attempts = match parse_env("REMINDER_MAX_DISPATCH_ATTEMPTS", 3_u32) {
            0 => {
                warn!("REMINDER_MAX_DISPATCH_ATTEMPTS must be at least 1, using 1.");
                1
            }
            attempts => attempts,
        };
        let retry_policy = RetryPolicy {
            max_attempts,
            backoff_millis: 1000 * parse_env("REMINDER_RETRY_BACKOFF_SECS", 300_i64).max(0),
        };

        Self {
            port: parse_env("PORT", 5000),
            store_path,
            reminder_poll_interval: Duration::from_secs(
                parse_env("REMINDER_POLL_INTERVAL_SECS", 300_u64).max(1),
            ),
            event_poll_interval: Duration::from_secs(
                parse_env("EVENT_POLL_INTERVAL_SECS", 3600_u64).max(1),
            ),
            dispatch_timeout: Duration::from_secs(parse_env("DISPATCH_TIMEOUT_SECS", 30)),
            retry_policy,
            ledger_retention_days: parse_env("LEDGER_RETENTION_DAYS", 7),
            email_api_url: optional_env("EMAIL_API_URL"),
            email_api_key: optional_env("EMAIL_API_KEY"),
            whatsapp_api_url: optional_env("WHATSAPP_API_URL")
                .unwrap_or_else(|| "https://api.whatsapp.com/send".into()),
            simulate_dispatch: parse_env("SIMULATE_DISPATCH", false),
            simulated_dispatch_latency: Duration::from_millis(parse_env(
                "SIMULATED_DISPATCH_LATENCY_MILLIS",
                500,
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        std::env::set_var("LEMBRETE_TEST_INVALID_PORT", "not-a-port");
        assert_eq!(parse_env("LEMBRETE_TEST_INVALID_PORT", 5000_usize), 5000);
        std::env::set_var("LEMBRETE_TEST_VALID_PORT", " 8080 ");
        assert_eq!(parse_env("LEMBRETE_TEST_VALID_PORT", 5000_usize), 8080);
        assert!(!parse_env("LEMBRETE_TEST_MISSING_FLAG", false));
        std::env::set_var("LEMBRETE_TEST_EMPTY", "");
        assert_eq!(optional_env("LEMBRETE_TEST_EMPTY"), None);
    }
}
