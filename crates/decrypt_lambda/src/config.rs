//! Runtime settings read from the Lambda environment.

pub const LOG_FORMAT_ENV: &str = "AWS_LAMBDA_LOG_FORMAT";
pub const LOG_LEVEL_ENV: &str = "AWS_LAMBDA_LOG_LEVEL";
pub const LOG_FILTER_ENV: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// The Lambda-managed log level wins over `RUST_LOG`; blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_format = match read(LOG_FORMAT_ENV) {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let log_filter = read(LOG_LEVEL_ENV)
            .map(|level| level.to_ascii_lowercase())
            .or_else(|| read(LOG_FILTER_ENV))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_format,
            log_filter,
        }
    }
}
