use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters describing how often the editor recomputed its grids and how
/// often each computation path failed.
#[derive(Debug, Default, Clone)]
pub struct EditorMetrics {
    recomputations: u64,
    skipped: u64,
    primary_failures: u64,
    subgrid_failures: u64,
}

impl EditorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_recompute(&mut self, primary_ok: bool, subgrid_ok: bool) {
        self.recomputations = self.recomputations.saturating_add(1);
        if !primary_ok {
            self.primary_failures = self.primary_failures.saturating_add(1);
        }
        if !subgrid_ok {
            self.subgrid_failures = self.subgrid_failures.saturating_add(1);
        }
    }

    pub fn record_skip(&mut self) {
        self.skipped = self.skipped.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: u64::try_from(uptime.as_millis()).unwrap_or(u64::MAX),
            recomputations: self.recomputations,
            skipped: self.skipped,
            primary_failures: self.primary_failures,
            subgrid_failures: self.subgrid_failures,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub recomputations: u64,
    pub skipped: u64,
    pub primary_failures: u64,
    pub subgrid_failures: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "editor_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("recomputations".to_string(), json!(self.recomputations));
        map.insert("skipped".to_string(), json!(self.skipped));
        map.insert("primary_failures".to_string(), json!(self.primary_failures));
        map.insert("subgrid_failures".to_string(), json!(self.subgrid_failures));
        map
    }
}
