mod error;
mod loader;
mod types;
mod validate;


pub use error::{ConfigError, ValidationIssue};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_or_default, parse_config};
pub use types::{
    BufferConfig, EventsConfig, FilterConfig, HighlightConfig, SourceConfig, TopologConfig,
};
pub use validate::validate;
