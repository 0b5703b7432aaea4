use crate::conf::{TopologConfig, load_or_default};
use crate::connection::{CHANNEL_CAPACITY, read_lines, run_consumer};
use crate::engine::Engine;
use crate::logging::LogMode;
use crate::ports::{Ports, TableRenderer};
use crate::render::{GraphModel, MemoryTable, StaticControls, TerminalTable};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::sync::mpsc;
use tracing::info;

/// Replay NDJSON records from stdin.
///
/// With `topology` the table is kept off stdout and the final topology is
/// printed as JSON instead.
pub async fn run_replay(config: Option<&Path>, topology: bool, mode: LogMode) -> Result<()> {
    let cfg = load_or_default(config).context("failed to load configuration")?;

    let graph = Arc::new(GraphModel::new());
    let table: Box<dyn TableRenderer> = if topology {
        Box::new(MemoryTable::new())
    } else {
        Box::new(TerminalTable::stdout(mode))
    };

    let ports = Ports {
        table,
        graph: graph.clone(),
        controls: Box::new(StaticControls::from(cfg.initial_controls())),
    };

    let engine = replay(BufReader::new(tokio::io::stdin()), &cfg, ports).await?;
    engine.teardown();

    if topology {
        let s = serde_json::to_string_pretty(&graph.snapshot())?;
        println!("{s}");
    }

    Ok(())
}

/// Dispatch every line of `reader` through a fresh engine and return it once
/// the input is exhausted.
pub async fn replay<R>(reader: R, cfg: &TopologConfig, ports: Ports) -> Result<Engine>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let engine = Engine::create(cfg, ports)?;

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let producer = tokio::spawn(read_lines(reader, tx));

    let engine = run_consumer(engine, rx).await;
    producer.await.context("reader task panicked")??;

    info!(
        records = engine.buffer().len(),
        loggers = engine.loggers().len(),
        nodes = engine.graph().node_count(),
        "replay finished"
    );

    Ok(engine)
}
