use crate::buffer::LogBuffer;
use crate::filter::{Filter, FilterControls, LoggerRegistry};
use crate::record::LogRecord;
use std::sync::Arc;
use tracing::debug;

/// Owns the live filter and logger discovery.
#[derive(Debug, Default)]
pub struct FilterEngine {
    live: Filter,
    registry: LoggerRegistry,
}

impl FilterEngine {
    pub fn new(initial: Filter) -> Self {
        Self {
            live: initial,
            registry: LoggerRegistry::new(),
        }
    }

    /// Enrol a logger on first sight.
    ///
    /// A new name is appended to the registry and selected in the live filter
    /// directly, because no control exists yet for it. Returns whether the
    /// name was new so the caller can refresh the logger selection UI.
    pub fn register_logger(&mut self, name: &str) -> bool {
        if !self.registry.register(name) {
            return false;
        }

        debug!(logger = name, "new logger discovered");
        self.live.selected_loggers.insert(name.to_owned());
        true
    }

    /// Replace the live filter with one derived from `controls`.
    pub fn recompute(&mut self, controls: &FilterControls) -> &Filter {
        self.live = Filter::recompute(controls);
        &self.live
    }

    pub fn apply(&self, buffer: &LogBuffer) -> Vec<Arc<LogRecord>> {
        self.live.apply(buffer)
    }

    pub fn filter(&self) -> &Filter {
        &self.live
    }

    pub fn registry(&self) -> &LoggerRegistry {
        &self.registry
    }
}
