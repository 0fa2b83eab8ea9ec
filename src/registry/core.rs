use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use blake3::Hash;
use serde_json::{Value, json};

use crate::error::{Result, StyleError};
use crate::logging::{FileSink, LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{MetricSnapshot, StyleMetrics};
use crate::style::{Attribute, Class, stylesheet};

/// Configuration knobs for a [`StyleRegistry`].
#[derive(Clone)]
pub struct RegistryConfig {
    /// Optional structured logger for compile and render events.
    pub logger: Option<Logger>,
    /// Shared counters, if metrics are enabled.
    pub metrics: Option<Arc<Mutex<StyleMetrics>>>,
    /// Target field used on emitted log events.
    pub log_target: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            log_target: "weft::registry".to_string(),
        }
    }
}

impl RegistryConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Log as JSON lines to `path`, truncating past `max_bytes` (0 never rotates).
    pub fn with_log_file(self, path: impl AsRef<Path>, max_bytes: u64) -> Result<Self> {
        let sink = FileSink::new(path, max_bytes)?;
        Ok(self.with_logger(Logger::new(sink)))
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(StyleMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<StyleMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Classes collected for one document, keyed by generated name.
///
/// Compilation itself is stateless; the registry is where callers keep the
/// classes a render produced and learn whether the stylesheet changed.
pub struct StyleRegistry {
    classes: BTreeMap<String, Class>,
    last_sheet: Option<Hash>,
    config: RegistryConfig,
    created: Instant,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::with_config(RegistryConfig::default())
    }
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            classes: BTreeMap::new(),
            last_sheet: None,
            config,
            created: Instant::now(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RegistryConfig {
        &mut self.config
    }

    /// Compile `attrs` and keep the class for the stylesheet. The returned
    /// class always carries the extra classes of this call, even when an
    /// equally named class is already stored.
    pub fn register(&mut self, attrs: &[Attribute]) -> Class {
        let class = Class::compile(attrs);
        if self.classes.contains_key(class.name()) {
            self.with_metrics(StyleMetrics::record_cache_hit);
            self.emit(
                LogLevel::Trace,
                "class.cache_hit",
                [json_kv("class", class.name())],
            );
            return class;
        }

        self.with_metrics(StyleMetrics::record_compile);
        self.emit(
            LogLevel::Debug,
            "class.compiled",
            [
                json_kv("class", class.name()),
                json_kv("declarations", class.rule().declarations().len()),
                json_kv("extra_classes", json!(class.extra_classes())),
            ],
        );
        self.classes.insert(class.name().to_string(), class.clone());
        class
    }

    /// Store an already compiled class. Returns `false` if the name was known.
    pub fn insert(&mut self, class: Class) -> bool {
        if self.classes.contains_key(class.name()) {
            return false;
        }
        self.classes.insert(class.name().to_string(), class);
        true
    }

    pub fn class(&self, name: &str) -> Result<&Class> {
        self.classes
            .get(name)
            .ok_or_else(|| StyleError::ClassNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    /// Forget every class. The last taken stylesheet is remembered, so the
    /// next [`take_stylesheet`](Self::take_stylesheet) reports the change.
    pub fn clear(&mut self) {
        self.classes.clear();
    }

    pub fn stylesheet(&self) -> String {
        stylesheet(self.classes.values())
    }

    /// Render the stylesheet, returning it only when its content differs
    /// from the previously taken one.
    pub fn take_stylesheet(&mut self) -> Option<String> {
        let sheet = self.stylesheet();
        let hash = blake3::hash(sheet.as_bytes());
        let changed = self.last_sheet.map(|last| last != hash).unwrap_or(true);
        self.with_metrics(|metrics| metrics.record_render(changed));

        if !changed {
            return None;
        }

        self.last_sheet = Some(hash);
        self.emit(
            LogLevel::Info,
            "stylesheet.changed",
            [
                json_kv("classes", self.classes.len()),
                json_kv("bytes", sheet.len()),
            ],
        );
        Some(sheet)
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let handle = self.config.metrics.as_ref()?;
        let metrics = handle.lock().ok()?;
        Some(metrics.snapshot(self.created.elapsed()))
    }

    /// Emit the current metrics snapshot through the configured logger.
    pub fn log_metrics(&self) -> Result<()> {
        let (Some(logger), Some(snapshot)) = (&self.config.logger, self.metrics_snapshot()) else {
            return Ok(());
        };
        logger.log_event(snapshot.to_log_event(&self.config.log_target))?;
        Ok(())
    }

    fn with_metrics(&self, record: impl FnOnce(&mut StyleMetrics)) {
        if let Some(handle) = &self.config.metrics {
            if let Ok(mut metrics) = handle.lock() {
                record(&mut *metrics);
            }
        }
    }

    fn emit<const N: usize>(&self, level: LogLevel, message: &str, fields: [(String, Value); N]) {
        let Some(logger) = &self.config.logger else {
            return;
        };
        if !logger.enabled(level) {
            return;
        }
        let event = event_with_fields(level, &self.config.log_target, message, fields);
        let _ = logger.log_event(event);
    }
}
