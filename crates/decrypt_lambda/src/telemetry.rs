use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, RuntimeConfig, DEFAULT_LOG_FILTER};

/// Installs the global subscriber. Lines carry no timestamp because the Lambda
/// log stream stamps every record.
pub fn init_tracing(config: &RuntimeConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config.log_filter))
        .with_target(false)
        .with_ansi(false)
        .without_time();

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
