use crate::errors::{AppError, Result};
use crate::trend::DEFAULT_WINDOW;
use std::{env, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub trend_window: usize,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            trend_window: DEFAULT_WINDOW,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub fn resolve_config() -> Result<Config> {
    resolve_with(|key| env::var(key).ok())
}

pub fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(url) = lookup("FINANCE_BASE_URL") {
        let url = url.trim().trim_end_matches('/');
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::config(format!(
                "FINANCE_BASE_URL must start with http:// or https://, got '{url}'"
            )));
        }
        config.base_url = url.to_string();
    }

    if let Some(raw) = lookup("FINANCE_TREND_WINDOW") {
        config.trend_window = match raw.trim().parse::<usize>() {
            Ok(window) if window > 0 => window,
            _ => {
                return Err(AppError::config(format!(
                    "FINANCE_TREND_WINDOW must be a positive integer, got '{raw}'"
                )));
            }
        };
    }

    if let Some(raw) = lookup("FINANCE_TIMEOUT_SECS") {
        let secs = raw.trim().parse::<u64>().map_err(|_| {
            AppError::config(format!("FINANCE_TIMEOUT_SECS must be an integer, got '{raw}'"))
        })?;
        config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
}
