use crate::buffer::DEFAULT_CAPACITY;
use crate::filter::FilterControls;
use crate::graph::{DEFAULT_HIGHLIGHT, EventCatalog, Palette, Protocol};
use crate::record::{EventKind, Level};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Root of `topolog.hcl`. Every block is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopologConfig {
    pub buffer: BufferConfig,
    pub highlight: HighlightConfig,
    pub palette: Palette,
    pub events: EventsConfig,
    pub filter: FilterConfig,
    pub source: SourceConfig,
}

impl TopologConfig {
    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight.duration_ms)
    }

    /// Event catalog for the configured protocol plus aliases. Aliases that
    /// do not name a canonical event are skipped; `validate` reports them.
    pub fn catalog(&self) -> EventCatalog {
        self.events
            .aliases
            .iter()
            .filter_map(|(alias, target)| Some((alias, EventKind::from_name(target)?)))
            .fold(
                EventCatalog::for_protocol(self.events.protocol),
                |catalog, (alias, kind)| catalog.with_alias(alias.clone(), kind),
            )
    }

    /// Control state a UI starts with before any logger is discovered.
    pub fn initial_controls(&self) -> FilterControls {
        FilterControls::default()
            .with_levels(self.filter.levels.iter().copied())
            .with_search(self.filter.search.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferConfig {
    pub capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    pub duration_ms: u64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_HIGHLIGHT.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventsConfig {
    pub protocol: Protocol,
    /// Extra wire name -> canonical event name.
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub levels: Vec<Level>,
    pub search: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            levels: Level::LOG_LEVELS.to_vec(),
            search: String::new(),
        }
    }
}

/// Where raw records come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    #[serde(rename = "websocket")]
    WebSocket {
        url: String,
        #[serde(default = "default_reconnect_ms")]
        reconnect_ms: u64,
    },
    Udp {
        #[serde(default = "default_udp_bind")]
        bind: String,
    },
    Stdin,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::WebSocket {
            url: "ws://localhost:3000/logs".to_owned(),
            reconnect_ms: default_reconnect_ms(),
        }
    }
}

fn default_reconnect_ms() -> u64 {
    1000
}

fn default_udp_bind() -> String {
    "0.0.0.0:3001".to_owned()
}
