use crate::conf::TopologConfig;
use crate::engine::Engine;
use crate::ports::Ports;
use crate::render::{GraphModel, MemoryTable, StaticControls};
use std::sync::{Arc, Mutex};

pub struct Harness {
    pub engine: Engine,
    pub graph: Arc<GraphModel>,
    pub table: Arc<Mutex<MemoryTable>>,
    pub controls: Arc<Mutex<StaticControls>>,
}

impl Harness {
    /// Must be called inside a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(TopologConfig::default())
    }

    pub fn with_config(config: TopologConfig) -> Self {
        let graph = Arc::new(GraphModel::recording());
        let table = Arc::new(Mutex::new(MemoryTable::new()));
        let controls = Arc::new(Mutex::new(StaticControls::default()));

        let engine = Engine::create(
            &config,
            Ports {
                table: Box::new(Arc::clone(&table)),
                graph: graph.clone(),
                controls: Box::new(Arc::clone(&controls)),
            },
        )
        .unwrap();

        Self {
            engine,
            graph,
            table,
            controls,
        }
    }

    pub fn table_messages(&self) -> Vec<String> {
        self.table.lock().unwrap().messages()
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
    serde_json::json!({
        "timeMillis": 0,
        "level": "EVENT",
        "loggerName": "x",
        "message": message,
    })
    .to_string()
}
