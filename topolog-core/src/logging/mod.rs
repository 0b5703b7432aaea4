//! Process diagnostics.
//!
//! topolog's own `tracing` output goes to stderr as flattened JSON lines so
//! the log table on stdout stays readable. With `TOKIO_CONSOLE` set the
//! tokio-console layer is installed instead, and no JSON is written.

use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(test)]
mod tests;

/// Variable that switches diagnostics to tokio-console.
pub const CONSOLE_ENV: &str = "TOKIO_CONSOLE";

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostics {
    Json,
    Console,
}

impl Diagnostics {
    pub fn from_env() -> Self {
        Self::select(std::env::var_os(CONSOLE_ENV).is_some())
    }

    pub fn select(console: bool) -> Self {
        if console { Self::Console } else { Self::Json }
    }
}

/// Install the global subscriber. Call once, before any engine is created.
pub fn init_logging() {
    match Diagnostics::from_env() {
        Diagnostics::Console => console_subscriber::init(),
        Diagnostics::Json => {
            fmt()
                .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
                .with_writer(io::stderr)
                .json()
                .flatten_event(true)
                .init();
        }
    }
}

/// Filter from a `RUST_LOG`-style spec, falling back to [`DEFAULT_DIRECTIVE`].
pub fn env_filter(spec: Option<&str>) -> EnvFilter {
    spec.and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// How the log table is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Append rows; suits pipes and files.
    Plain,
    /// Clear and redraw the whole view on every change.
    Pretty,
}

impl LogMode {
    /// Mode for the current stdout. `force_plain` wins over terminal
    /// detection.
    pub fn for_stdout(force_plain: bool) -> Self {
        Self::resolve(force_plain, io::stdout().is_terminal())
    }

    pub fn resolve(force_plain: bool, terminal: bool) -> Self {
        if terminal && !force_plain {
            LogMode::Pretty
        } else {
            LogMode::Plain
        }
    }
}
