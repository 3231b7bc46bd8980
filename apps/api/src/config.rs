use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis backend for history and session keys. `None` selects the in-process store.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub analyze_latency: Duration,
    pub stats_latency: Duration,
    pub history_latency: Duration,
    pub auth_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            analyze_latency: Duration::from_millis(1500),
            stats_latency: Duration::from_millis(800),
            history_latency: Duration::from_millis(600),
            auth_latency: Duration::from_millis(1000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            analyze_latency: latency_env("ANALYZE_LATENCY_MS", defaults.analyze_latency)?,
            stats_latency: latency_env("STATS_LATENCY_MS", defaults.stats_latency)?,
            history_latency: latency_env("HISTORY_LATENCY_MS", defaults.history_latency)?,
            auth_latency: latency_env("AUTH_LATENCY_MS", defaults.auth_latency)?,
        })
    }

    /// Same settings with every simulated delay removed.
    #[cfg(test)]
    pub fn without_latency(self) -> Self {
        Self {
            analyze_latency: Duration::ZERO,
            stats_latency: Duration::ZERO,
            history_latency: Duration::ZERO,
            auth_latency: Duration::ZERO,
            ..self
        }
    }
}

fn latency_env(key: &str, default: Duration) -> Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => parse_millis(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration> {
    let ms = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of milliseconds, got '{raw}'"))?;
    Ok(Duration::from_millis(ms))
}
