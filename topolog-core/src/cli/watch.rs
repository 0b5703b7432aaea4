use crate::conf::load_or_default;
use crate::connection::{CHANNEL_CAPACITY, run_consumer, spawn_source};
use crate::engine::Engine;
use crate::logging::LogMode;
use crate::ports::Ports;
use crate::render::{GraphModel, StaticControls, TerminalTable};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Connect to the configured source and render until interrupted or until
/// the source gives up.
pub async fn run_watch(config: Option<&Path>, mode: LogMode) -> Result<()> {
    let cfg = load_or_default(config).context("failed to load configuration")?;

    let graph = Arc::new(GraphModel::new());
    let engine = Engine::create(
        &cfg,
        Ports {
            table: Box::new(TerminalTable::stdout(mode)),
            graph: graph.clone(),
            controls: Box::new(StaticControls::from(cfg.initial_controls())),
        },
    )?;

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let source = spawn_source(&cfg.source, tx);

    tokio::select! {
        engine = run_consumer(engine, rx) => {
            engine.teardown();
            source.await.context("source task panicked")??;
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for ctrl-c")?;
            source.abort();
        }
    }

    let snapshot = graph.snapshot();
    info!(
        nodes = snapshot.nodes.len(),
        edges = snapshot.edges.len(),
        "watch stopped"
    );

    Ok(())
}
