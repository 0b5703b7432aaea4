use crate::conf::{ConfigError, SourceConfig, TopologConfig, load_config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            for line in summary(&cfg) {
                println!("✔ {line}");
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

/// One line per resolved setting worth confirming.
pub fn summary(cfg: &TopologConfig) -> Vec<String> {
    let source = match &cfg.source {
        SourceConfig::WebSocket { url, .. } => format!("source: websocket {url}"),
        SourceConfig::Udp { bind } => format!("source: udp {bind}"),
        SourceConfig::Stdin => "source: stdin".to_owned(),
    };

    vec![
        "Config loaded successfully".to_owned(),
        format!("buffer capacity: {}", cfg.buffer.capacity),
        format!("highlight: {} ms", cfg.highlight.duration_ms),
        format!(
            "event protocol: {:?} ({} aliases)",
            cfg.events.protocol,
            cfg.events.aliases.len()
        ),
        source,
    ]
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{err}");
    } else {
        eprintln!();
        eprintln!("{} {err}", "error:".red().bold());
    }

    if let ConfigError::Validation { issues } = err {
        for issue in issues {
            eprintln!("  - {issue}");
        }
    }

    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a starter config with:\n\
             \n\
             topolog config init",
        ),

        ConfigError::Validation { issues }
            if issues.iter().any(|i| i.field.starts_with("events.aliases")) =>
        {
            Some(
                "Alias targets must be canonical event names.\n\
                 \n\
                 Example:\n\
                 \n\
                 events {\n\
                 \x20 aliases = {\n\
                 \x20   endpoint_up = \"client_started\"\n\
                 \x20 }\n\
                 }",
            )
        }

        ConfigError::Validation { issues }
            if issues.iter().any(|i| i.field.starts_with("source")) =>
        {
            Some(
                "Sources are `websocket` (url = \"ws://...\"), `udp` (bind = \"0.0.0.0:3001\") \
                 or `stdin`.",
            )
        }

        _ => None,
    }
}
