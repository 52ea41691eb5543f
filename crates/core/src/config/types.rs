//! Configuration types.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Reservation orchestrator settings.
    #[serde(default)]
    pub reserve: ReserveConfig,

    /// Analytics settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Settings for the reservation orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReserveConfig {
    /// Capacity of the one-shot event channel. Events emitted beyond this
    /// while no observer is draining are dropped with a warning.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Festival id used when a trigger arrives without one.
    #[serde(default)]
    pub default_festival_id: i64,
}

impl Default for ReserveConfig {
    fn default() -> Self {
        Self {
            event_capacity: default_event_capacity(),
            default_festival_id: 0,
        }
    }
}

fn default_event_capacity() -> usize {
    16
}

/// Settings for the analytics sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsConfig {
    /// Whether analytics events are recorded at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// Validate a loaded configuration.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.reserve.event_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "reserve.event_capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}
