use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_BASE};

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_base: String,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let upstream_base = normalize_base(
            &env::var("TEMP_SERVER_BASE").unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string()),
        );

        let timeout_secs = env::var("TEMP_CLIENT_TIMEOUT")
            .ok()
            .and_then(|t| t.parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t > 0.0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let host = env::var("TEMP_DASH_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("TEMP_DASH_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let debug = env::var("TEMP_DASH_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            upstream_base,
            timeout: Duration::from_secs_f64(timeout_secs),
            host,
            port,
            debug,
        }
    }
}

/// The base is stored without a trailing slash so relative paths concatenate cleanly.
fn normalize_base(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
