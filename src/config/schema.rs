//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OnErrorConfig {
    /// Subscriber settings (level, output format).
    pub logging: LoggingConfig,

    /// HTTP failure classification.
    pub http: HttpConfig,

    /// Behavior of fatal records.
    pub fatal: FatalConfig,
}

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Output format.
    pub format: LogFormat,

    /// Extra filter directives, e.g. "hyper=warn".
    pub target_filter: Option<String>,
}

impl LoggingConfig {
    /// Filter directives combining the level with any extra directives.
    pub fn directives(&self) -> String {
        match &self.target_filter {
            Some(extra) if !extra.trim().is_empty() => format!("{},{}", self.level, extra.trim()),
            _ => self.level.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
        }
    }
}

/// Bounds (inclusive) of the status codes counted as failures.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    pub error_status_min: u16,
    pub error_status_max: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            error_status_min: 400,
            error_status_max: 599,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FatalConfig {
    /// Process exit code after a fatal record.
    pub exit_code: i32,
}

impl Default for FatalConfig {
    fn default() -> Self {
        Self { exit_code: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OnErrorConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.http.error_status_min, 400);
        assert_eq!(config.http.error_status_max, 599);
        assert_eq!(config.fatal.exit_code, 1);
    }

    #[test]
    fn test_partial_toml() {
        let config: OnErrorConfig = toml::from_str(
            r#"
            [logging]
            format = "json"

            [http]
            error_status_min = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.http.error_status_min, 500);
        assert_eq!(config.http.error_status_max, 599);
    }

    #[test]
    fn test_directives() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.directives(), "info");

        logging.target_filter = Some(" hyper=warn ".into());
        assert_eq!(logging.directives(), "info,hyper=warn");
    }
}
