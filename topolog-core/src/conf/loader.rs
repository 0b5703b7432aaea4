use crate::conf::validate::validate;
use crate::conf::{ConfigError, TopologConfig};
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "topolog.hcl";

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<TopologConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    parse_config(&src, path)
}

/// Parse and validate config source text. `origin` is only used in errors.
pub fn parse_config(src: &str, origin: &Path) -> Result<TopologConfig, ConfigError> {
    let cfg: TopologConfig = hcl::from_str(src).map_err(|e| ConfigError::parse(origin, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all issues)
    //--------------------------------------------------------------------------
    validate(&cfg).map_err(|issues| ConfigError::Validation { issues })?;

    Ok(cfg)
}

/// Load `path` when given. Otherwise use `topolog.hcl` from the working
/// directory if present, and built-in defaults if not.
pub fn load_or_default(path: Option<&Path>) -> Result<TopologConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        load_config(fallback)
    } else {
        info!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
        Ok(TopologConfig::default())
    }
}
