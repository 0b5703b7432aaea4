use crate::conf::{SourceConfig, TopologConfig, ValidationIssue};
use crate::record::{EventKind, Level};
use std::net::SocketAddr;
use url::Url;

/// Check semantic constraints, collecting every issue instead of stopping at
/// the first one.
pub fn validate(cfg: &TopologConfig) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if cfg.buffer.capacity == 0 {
        issues.push(ValidationIssue::new(
            "buffer.capacity",
            "must hold at least one record",
        ));
    }

    if cfg.highlight.duration_ms == 0 {
        issues.push(ValidationIssue::new(
            "highlight.duration_ms",
            "must be at least 1 ms",
        ));
    }

    for (name, color) in cfg.palette.entries() {
        if !color.is_valid_hex() {
            issues.push(ValidationIssue::new(
                format!("palette.{name}"),
                format!("'{color}' is not a #RRGGBB color"),
            ));
        }
    }

    for (alias, target) in &cfg.events.aliases {
        if EventKind::from_name(target).is_none() {
            issues.push(ValidationIssue::new(
                format!("events.aliases.{alias}"),
                format!("'{target}' is not a known event"),
            ));
        }
    }

    if cfg.filter.levels.contains(&Level::Event) {
        issues.push(ValidationIssue::new(
            "filter.levels",
            "EVENT records are never shown in the log table",
        ));
    }

    validate_source(&cfg.source, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn validate_source(source: &SourceConfig, issues: &mut Vec<ValidationIssue>) {
    match source {
        SourceConfig::WebSocket { url, reconnect_ms } => {
            match Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "ws" | "wss") => {}
                Ok(parsed) => issues.push(ValidationIssue::new(
                    "source.url",
                    format!("unsupported scheme '{}', expected ws or wss", parsed.scheme()),
                )),
                Err(e) => issues.push(ValidationIssue::new("source.url", e.to_string())),
            }

            if *reconnect_ms == 0 {
                issues.push(ValidationIssue::new(
                    "source.reconnect_ms",
                    "must be at least 1 ms",
                ));
            }
        }
        SourceConfig::Udp { bind } => {
            if bind.parse::<SocketAddr>().is_err() {
                issues.push(ValidationIssue::new(
                    "source.bind",
                    format!("'{bind}' is not a socket address"),
                ));
            }
        }
        SourceConfig::Stdin => {}
    }
}
