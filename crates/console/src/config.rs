//! Startup configuration, read from the environment.
//!
//! - `BANKMS_LOG_FORMAT`: `pretty` (default) or `json`
//! - `BANKMS_LOG_LEVEL`: filter used when `RUST_LOG` is unset (default `warn`)
//!
//! `RUST_LOG` itself is honored by the subscriber and overrides both.

use bankms_observability::{LogConfig, LogFormat};

pub const LOG_FORMAT_VAR: &str = "BANKMS_LOG_FORMAT";
pub const LOG_LEVEL_VAR: &str = "BANKMS_LOG_LEVEL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub log: LogConfig,
}

impl ConsoleConfig {
    /// Read the process environment.
    ///
    /// Returns the config plus warnings for values that were ignored; they are
    /// meant to be logged once the subscriber is installed.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log.format = format,
                Err(e) => warnings.push(format!("{LOG_FORMAT_VAR}: {e}; using default")),
            }
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|l| !l.trim().is_empty()) {
            config.log.default_filter = level.trim().to_string();
        }

        (config, warnings)
    }
}
