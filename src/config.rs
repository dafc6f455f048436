// src/config.rs

use crate::errors::ConfigError;
use crate::feed::ParserConfig;

pub const SANITIZE_VAR: &str = "LISTING_FEED_SANITIZE";
pub const WORKERS_VAR: &str = "LISTING_FEED_WORKERS";
pub const LOG_VAR: &str = "LISTING_FEED_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Strip illegal XML characters instead of rejecting the feed.
    pub sanitize_invalid_chars: bool,
    pub worker_threads: Option<usize>,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            sanitize_invalid_chars: false,
            worker_threads: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SANITIZE_VAR) {
            config.sanitize_invalid_chars = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => return Err(invalid(SANITIZE_VAR, value.clone())),
            };
        }

        if let Some(value) = lookup(WORKERS_VAR) {
            let threads = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| invalid(WORKERS_VAR, value.clone()))?;
            config.worker_threads = Some(threads);
        }

        if let Some(value) = lookup(LOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_filter = value;
        }

        Ok(config)
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            worker_threads: self.worker_threads,
        }
    }
}

fn invalid(name: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { name, value }
}
