//! Tracing/logging initialization.
//!
//! Configuration comes from the environment: `RUST_LOG` selects the filter and
//! `CATALOG_LOG_FORMAT` picks `json` (default) or `pretty` output.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "CATALOG_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info,catalog_categories=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(FORMAT_ENV).ok(),
        )
    }

    /// Build from raw variable values; missing or unknown values fall back to
    /// the defaults.
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = format
            .as_deref()
            .and_then(LogFormat::parse)
            .unwrap_or_default();

        Self { filter, format }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = try_init(&LogConfig::from_env());
}

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn try_init(config: &LogConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    result.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_json() {
        assert_eq!(
            LogConfig::from_vars(None, None),
            LogConfig {
                filter: "info".to_string(),
                format: LogFormat::Json,
            }
        );
    }

    #[test]
    fn reads_filter_and_format() {
        let config = LogConfig::from_vars(
            Some("catalog_categories=debug".to_string()),
            Some(" Pretty ".to_string()),
        );
        assert_eq!(config.filter, "catalog_categories=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn unknown_or_blank_values_fall_back() {
        let config = LogConfig::from_vars(Some("  ".to_string()), Some("xml".to_string()));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        assert!(try_init(&LogConfig::default()).is_err());
    }
}
