//! Fire-and-forget analytics notifications.
//!
//! Analytics must never block or fail the orchestration; implementations
//! are synchronous and infallible from the caller's point of view.

use std::sync::Arc;

use crate::config::AnalyticsConfig;

/// Analytics notification sink.
pub trait Analytics: Send + Sync {
    /// Record a named event for a festival.
    fn log_event(&self, name: &str, festival_id: i64);
}

/// Analytics sink that records events to the tracing log.
#[derive(Debug, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn log_event(&self, name: &str, festival_id: i64) {
        tracing::info!(event = name, festival_id, "analytics event");
    }
}

/// Analytics sink that drops everything.
#[derive(Debug, Default)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn log_event(&self, _name: &str, _festival_id: i64) {}
}

/// Build the analytics sink selected by configuration.
pub fn create_analytics(config: &AnalyticsConfig) -> Arc<dyn Analytics> {
    if config.enabled {
        Arc::new(TracingAnalytics)
    } else {
        Arc::new(NoopAnalytics)
    }
}
