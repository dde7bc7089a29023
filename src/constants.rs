/// Default upstream telemetry server base URL
pub const DEFAULT_UPSTREAM_BASE: &str = "http://127.0.0.1:8080";

/// Default outbound request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 3.0;

/// Default granularity for /api/series_all
pub const DEFAULT_KIND: &str = "hourly";

/// Default row cap forwarded to upstream /api/series
pub const DEFAULT_LIMIT: u32 = 20000;

/// Upstream endpoint serving time-series data
pub const SERIES_PATH: &str = "/api/series";
