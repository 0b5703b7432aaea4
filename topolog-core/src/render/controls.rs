use crate::filter::{Filter, FilterControls, LoggerRegistry};
use crate::ports::FilterControlsReader;
use crate::record::Level;

/// Controls that never change on their own: fixed level and search
/// selections, with a checkbox per discovered logger.
///
/// A logger control is rendered checked when the live filter selects it,
/// so newly discovered loggers start out visible.
#[derive(Debug, Clone)]
pub struct StaticControls {
    controls: FilterControls,
}

impl StaticControls {
    pub fn new(levels: impl IntoIterator<Item = Level>, search_text: impl Into<String>) -> Self {
        Self {
            controls: FilterControls::default()
                .with_levels(levels)
                .with_search(search_text),
        }
    }

    /// Uncheck a logger, as a user clicking its checkbox would.
    pub fn deselect_logger(&mut self, name: &str) {
        self.controls.selected_logger_names.remove(name);
    }

    pub fn select_logger(&mut self, name: impl Into<String>) {
        self.controls.selected_logger_names.insert(name.into());
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.controls.search_text = text.into();
    }

    pub fn set_levels(&mut self, levels: impl IntoIterator<Item = Level>) {
        self.controls.selected_levels = levels.into_iter().collect();
    }
}

impl From<FilterControls> for StaticControls {
    fn from(controls: FilterControls) -> Self {
        Self { controls }
    }
}

impl Default for StaticControls {
    fn default() -> Self {
        Self::new(Level::LOG_LEVELS, "")
    }
}

impl FilterControlsReader for StaticControls {
    fn read_filter_controls(&self) -> FilterControls {
        self.controls.clone()
    }

    fn loggers_changed(&mut self, registry: &LoggerRegistry, live: &Filter) {
        for name in registry.names() {
            if live.selected_loggers.contains(name) {
                self.controls.selected_logger_names.insert(name.clone());
            }
        }
    }
}
