use crate::engine::Engine;
use tokio::sync::mpsc::Receiver;
use tracing::debug;

/// Dispatch every message until all senders are gone, then hand the engine
/// back so the caller can inspect or tear it down.
pub async fn run_consumer(mut engine: Engine, mut rx: Receiver<String>) -> Engine {
    let mut dispatched = 0usize;

    while let Some(raw) = rx.recv().await {
        engine.dispatch(&raw);
        dispatched += 1;
    }

    debug!(dispatched, "all sources closed");
    engine
}
