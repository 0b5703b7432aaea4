use crate::buffer::LogBuffer;
use crate::filter::FilterControls;
use crate::record::{Level, LogRecord};
use ahash::AHashSet;
use std::sync::Arc;

/// Combined predicate deciding which buffered records are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub selected_levels: AHashSet<Level>,
    pub selected_loggers: AHashSet<String>,
    pub search_text: String,
}

impl Filter {
    /// Derive a brand-new filter from control state. Pure and total: nothing
    /// of any previous filter survives.
    pub fn recompute(controls: &FilterControls) -> Self {
        Self {
            selected_levels: controls.selected_levels.clone(),
            selected_loggers: controls.selected_logger_names.clone(),
            search_text: controls.search_text.clone(),
        }
    }

    /// Case-sensitive substring match on the message, plus level and logger
    /// membership.
    pub fn matches(&self, record: &LogRecord) -> bool {
        let search_ok =
            self.search_text.is_empty() || record.message.contains(self.search_text.as_str());

        search_ok
            && self.selected_levels.contains(&record.level)
            && self.selected_loggers.contains(&record.logger_name)
    }

    /// Re-filter the entire buffer, preserving buffer order.
    pub fn apply(&self, buffer: &LogBuffer) -> Vec<Arc<LogRecord>> {
        buffer
            .snapshot()
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
