use crate::record::Level;
use serde::{Deserialize, Serialize};

/// One unit delivered over the stream.
///
/// Immutable once ingested; the engine shares records as `Arc<LogRecord>`
/// between the buffer and the filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub time_millis: i64,
    pub level: Level,
    pub logger_name: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        time_millis: i64,
        level: Level,
        logger_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            time_millis,
            level,
            logger_name: logger_name.into(),
            message: message.into(),
        }
    }

    /// Parse one raw stream message.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn is_event(&self) -> bool {
        self.level == Level::Event
    }
}
