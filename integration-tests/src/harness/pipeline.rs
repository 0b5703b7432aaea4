use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use topolog_core::conf::{SourceConfig, TopologConfig};
use topolog_core::connection::{CHANNEL_CAPACITY, ConnectionError, run_consumer, spawn_source};
use topolog_core::engine::Engine;
use topolog_core::ports::Ports;
use topolog_core::render::{GraphModel, MemoryTable, StaticControls};

/// A running source -> engine pipeline with in-memory renderers.
pub struct TestPipeline {
    pub graph: Arc<GraphModel>,
    pub table: Arc<Mutex<MemoryTable>>,
    source: JoinHandle<Result<(), ConnectionError>>,
    consumer: JoinHandle<Engine>,
}

impl TestPipeline {
    /// Must be called inside a tokio runtime.
    pub fn start(source: SourceConfig) -> Self {
        let config = TopologConfig {
            source,
            ..TopologConfig::default()
        };

        let graph = Arc::new(GraphModel::recording());
        let table = Arc::new(Mutex::new(MemoryTable::new()));

        let engine = Engine::create(
            &config,
            Ports {
                table: Box::new(Arc::clone(&table)),
                graph: graph.clone(),
                controls: Box::new(StaticControls::from(config.initial_controls())),
            },
        )
        .expect("failed to create engine");

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let source = spawn_source(&config.source, tx);
        let consumer = tokio::spawn(run_consumer(engine, rx));

        Self {
            graph,
            table,
            source,
            consumer,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.table.lock().unwrap().messages()
    }

    /// Poll `check` until it holds (or panic with `what`).
    pub async fn wait_until(&self, what: &str, check: impl Fn(&Self) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);

        while !check(self) {
            if Instant::now() > deadline {
                panic!("timed out waiting for {what}");
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Stop the source and return the engine once every queued message was
    /// dispatched.
    pub async fn shutdown(self) -> Engine {
        self.source.abort();
        self.consumer.await.expect("consumer task panicked")
    }
}

pub fn log_line(n: i64, level: &str, logger: &str, message: &str) -> String {
    serde_json::json!({
        "timeMillis": n,
        "level": level,
        "loggerName": logger,
        "message": message,
    })
    .to_string()
}

pub fn event_line(event: &str, data: &str) -> String {
    let message = serde_json::json!({ "event": event, "data": data }).to_string();
    log_line(0, "EVENT", "relay", &message)
}
