use crate::record::Level;
use ahash::AHashSet;

/// Read-only snapshot of the filter controls a UI currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub selected_logger_names: AHashSet<String>,
    pub selected_levels: AHashSet<Level>,
    pub search_text: String,
}

impl FilterControls {
    /// Every log level checked, no logger checked, empty search.
    pub fn all_levels() -> Self {
        Self {
            selected_levels: Level::LOG_LEVELS.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_loggers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_logger_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.selected_levels = levels.into_iter().collect();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }
}
