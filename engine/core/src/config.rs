//! Engine Configuration
//!
//! Tuning knobs for the state engine, with defaults that match the shipped
//! application and environment overrides for experiments.

use std::time::Duration;

use tracing::warn;

use crate::reducer::DEFAULT_MIN_SEARCH_LENGTH;

/// Default quiet period before a search emission.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// State engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Quiet period a search keystroke must survive before it is applied.
    pub debounce: Duration,
    /// Search text shorter than this is treated as no search at all.
    pub min_search_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
        }
    }
}

impl EngineConfig {
    /// Defaults, overridden by `ICONFLOW_DEBOUNCE_MS` and
    /// `ICONFLOW_MIN_SEARCH_LEN` where set. Unparseable values are ignored
    /// with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("ICONFLOW_DEBOUNCE_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => config.debounce = Duration::from_millis(ms),
                Err(_) => warn!(value = %raw, "ignoring unparseable ICONFLOW_DEBOUNCE_MS"),
            }
        }

        if let Ok(raw) = std::env::var("ICONFLOW_MIN_SEARCH_LEN") {
            match raw.parse::<usize>() {
                Ok(len) => config.min_search_length = len,
                Err(_) => warn!(value = %raw, "ignoring unparseable ICONFLOW_MIN_SEARCH_LEN"),
            }
        }

        config
    }
}
