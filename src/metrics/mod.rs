use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters for class compilation and stylesheet rendering.
#[derive(Debug, Default, Clone)]
pub struct StyleMetrics {
    compiled: u64,
    cache_hits: u64,
    renders: u64,
    changed_renders: u64,
}

impl StyleMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_compile(&mut self) {
        self.compiled = self.compiled.saturating_add(1);
    }

    pub fn record_cache_hit(&mut self) {
        self.cache_hits = self.cache_hits.saturating_add(1);
    }

    pub fn record_render(&mut self, changed: bool) {
        self.renders = self.renders.saturating_add(1);
        if changed {
            self.changed_renders = self.changed_renders.saturating_add(1);
        }
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            compiled: self.compiled,
            cache_hits: self.cache_hits,
            renders: self.renders,
            changed_renders: self.changed_renders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub compiled: u64,
    pub cache_hits: u64,
    pub renders: u64,
    pub changed_renders: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "style_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("compiled".to_string(), json!(self.compiled));
        map.insert("cache_hits".to_string(), json!(self.cache_hits));
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("changed_renders".to_string(), json!(self.changed_renders));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_counters() {
        let mut metrics = StyleMetrics::new();
        metrics.record_compile();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_render(true);
        metrics.record_render(false);

        let snapshot = metrics.snapshot(Duration::from_millis(42));
        assert_eq!(snapshot.compiled, 1);
        assert_eq!(snapshot.cache_hits, 2);
        assert_eq!(snapshot.renders, 2);
        assert_eq!(snapshot.changed_renders, 1);

        let event = snapshot.to_log_event("weft::metrics");
        assert_eq!(event.message, "style_metrics");
        assert_eq!(event.fields["uptime_ms"], 42);
    }
}
