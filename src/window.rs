//! Time-range derivation for the series endpoints.

use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::error::ProxyError;

/// Lookback for the hourly aggregate: 60 days.
const HOURLY_LOOKBACK_SECS: i64 = 60 * 24 * 3600;

/// Lookback for raw samples: 24 hours.
const RAW_LOOKBACK_SECS: i64 = 24 * 3600;

/// Time-series resolution offered by the upstream server. Selects both the
/// window-derivation rule and the upstream aggregation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hourly,
    Daily,
    Raw,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
            Granularity::Raw => "raw",
        }
    }
}

impl FromStr for Granularity {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Granularity::Hourly),
            "daily" => Ok(Granularity::Daily),
            "raw" => Ok(Granularity::Raw),
            _ => Err(ProxyError::InvalidKind),
        }
    }
}

/// A `[from, to]` Unix-second range plus the row cap, ready to forward
/// upstream. Built fresh per request and discarded after the forwarded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub kind: Granularity,
    pub from: i64,
    pub to: i64,
    pub limit: u32,
}

impl Window {
    /// Derive the window for `kind`, anchored to `now`. Both endpoints come
    /// from the single `now` sample; nothing re-reads the clock.
    pub fn resolve(kind: Granularity, limit: u32, now: DateTime<Utc>) -> Self {
        let to = now.timestamp();
        let from = match kind {
            Granularity::Hourly => to - HOURLY_LOOKBACK_SECS,
            Granularity::Raw => to - RAW_LOOKBACK_SECS,
            Granularity::Daily => Utc
                .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
                .single()
                .unwrap()
                .timestamp(),
        };
        Self {
            kind,
            from,
            to,
            limit,
        }
    }

    /// Query parameters as decimal strings, the form upstream expects.
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("kind".to_string(), self.kind.as_str().to_string()),
            ("from".to_string(), self.from.to_string()),
            ("to".to_string(), self.to.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}
