use chrono::NaiveDate;
use wfm_core::filters::DateRange;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Date range substituted when a report request omits its dates.
    pub default_report_range: DateRange,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                    |
    /// |-----------------------------|----------------------------|
    /// | `HOST`                      | `0.0.0.0`                  |
    /// | `PORT`                      | `3000`                     |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                       |
    /// | `REPORT_DEFAULT_START_DATE` | `2025-07-07`               |
    /// | `REPORT_DEFAULT_END_DATE`   | `2025-07-13`               |
    ///
    /// Panics on malformed values; misconfiguration should fail fast at
    /// startup rather than surface per-request.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let default_start: NaiveDate = std::env::var("REPORT_DEFAULT_START_DATE")
            .unwrap_or_else(|_| "2025-07-07".into())
            .parse()
            .expect("REPORT_DEFAULT_START_DATE must be a YYYY-MM-DD date");

        let default_end: NaiveDate = std::env::var("REPORT_DEFAULT_END_DATE")
            .unwrap_or_else(|_| "2025-07-13".into())
            .parse()
            .expect("REPORT_DEFAULT_END_DATE must be a YYYY-MM-DD date");

        let default_report_range = DateRange::new(default_start, default_end)
            .expect("REPORT_DEFAULT_END_DATE must not precede REPORT_DEFAULT_START_DATE");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_report_range,
        }
    }
}
