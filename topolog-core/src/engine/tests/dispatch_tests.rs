use crate::conf::TopologConfig;
use crate::engine::tests::test_helpers::{Harness, event_line, log_line};
use crate::engine::{Dispatched, Engine, EngineError};
use crate::filter::{Filter, FilterControls, LoggerRegistry};
use crate::graph::GraphError;
use crate::ports::{FilterControlsReader, Ports};
use crate::record::Level;
use crate::render::{GraphModel, MemoryTable, StaticControls};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn buffer_stabilizes_at_capacity_with_most_recent_records() {
    let mut h = Harness::new();

    for n in 1..=200 {
        h.engine
            .dispatch(&log_line(n, "INFO", "app", &format!("record {n}")));
    }

    assert_eq!(h.engine.buffer().len(), 150);
    let expected: Vec<String> = (51..=200).map(|n| format!("record {n}")).collect();
    assert_eq!(h.table_messages(), expected);
    assert_eq!(h.table.lock().unwrap().renders(), 200);
}

#[tokio::test]
async fn log_record_is_rendered_and_logger_discovered() {
    let mut h = Harness::new();

    let outcome = h.engine.dispatch(&log_line(1, "WARN", "broker", "disk low"));

    assert!(matches!(
        outcome,
        Dispatched::Logged {
            new_logger: true,
            visible: 1
        }
    ));
    assert_eq!(h.engine.loggers().names(), &["broker"]);
    assert!(h.engine.filter().selected_loggers.contains("broker"));
    assert_eq!(h.table_messages(), vec!["disk low"]);

    let outcome = h.engine.dispatch(&log_line(2, "INFO", "broker", "ok"));
    assert!(matches!(
        outcome,
        Dispatched::Logged {
            new_logger: false,
            visible: 2
        }
    ));
}

#[tokio::test]
async fn malformed_record_is_dropped_and_processing_continues() {
    let mut h = Harness::new();

    assert!(matches!(h.engine.dispatch("{not json"), Dispatched::Dropped));
    assert!(matches!(
        h.engine.dispatch(r#"{"timeMillis":0,"level":"INFO"}"#),
        Dispatched::Dropped
    ));
    assert!(matches!(
        h.engine.dispatch(r#"{"timeMillis":0,"level":"LOUD","loggerName":"a","message":"m"}"#),
        Dispatched::Dropped
    ));

    h.engine.dispatch(&log_line(1, "INFO", "app", "still alive"));

    assert_eq!(h.engine.buffer().len(), 1);
    assert_eq!(h.table_messages(), vec!["still alive"]);
}

#[tokio::test]
async fn malformed_event_payload_is_dropped() {
    let mut h = Harness::new();
    let raw = log_line(0, "EVENT", "x", "client_started A");

    assert!(matches!(h.engine.dispatch(&raw), Dispatched::Dropped));
    assert_eq!(h.engine.graph().node_count(), 1);
    assert!(h.engine.buffer().is_empty());
}

#[tokio::test]
async fn event_records_never_reach_the_buffer() {
    let mut h = Harness::new();

    h.engine.dispatch(&event_line("client_started", "A"));

    assert!(h.engine.buffer().is_empty());
    assert!(h.engine.loggers().is_empty());
    assert_eq!(h.table.lock().unwrap().renders(), 0);
}

#[tokio::test]
async fn unknown_event_is_ignored() {
    let mut h = Harness::new();

    let outcome = h.engine.dispatch(&event_line("decrypt_data", "A"));

    match outcome {
        Dispatched::Ignored(GraphError::UnknownEvent { event }) => {
            assert_eq!(event, "decrypt_data")
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(h.engine.graph().node_count(), 1);
}

#[tokio::test]
async fn deselected_logger_stays_hidden_when_another_logger_appears() {
    let mut h = Harness::new();
    h.engine.dispatch(&log_line(1, "INFO", "a", "from a"));
    h.engine.dispatch(&log_line(2, "INFO", "b", "from b"));

    h.controls.lock().unwrap().deselect_logger("a");
    let visible = h.engine.controls_changed();

    assert_eq!(visible, 1);
    assert_eq!(h.table_messages(), vec!["from b"]);

    h.engine.dispatch(&log_line(3, "INFO", "c", "from c"));
    h.engine.dispatch(&log_line(4, "INFO", "a", "a again"));

    assert_eq!(h.table_messages(), vec!["from b", "from c"]);
    assert_eq!(h.engine.loggers().names(), &["a", "b", "c"]);
}

#[tokio::test]
async fn controls_drive_levels_and_search() {
    let mut h = Harness::new();
    h.engine.dispatch(&log_line(1, "INFO", "a", "Key rotated"));
    h.engine.dispatch(&log_line(2, "ERROR", "a", "Key lost"));
    h.engine.dispatch(&log_line(3, "ERROR", "a", "key lost"));

    {
        let mut controls = h.controls.lock().unwrap();
        controls.set_levels([Level::Error]);
        controls.set_search("Key");
    }
    h.engine.controls_changed();

    assert_eq!(h.table_messages(), vec!["Key lost"]);
    assert_eq!(h.engine.visible_rows().len(), 1);
}

#[tokio::test]
async fn eviction_ignores_the_filter() {
    let mut config = TopologConfig::default();
    config.buffer.capacity = 2;
    let mut h = Harness::with_config(config);

    h.engine.dispatch(&log_line(1, "ERROR", "a", "visible error"));
    h.controls.lock().unwrap().set_levels([Level::Error]);
    h.engine.dispatch(&log_line(2, "INFO", "a", "hidden 1"));
    h.engine.dispatch(&log_line(3, "INFO", "a", "hidden 2"));

    assert_eq!(h.engine.buffer().len(), 2);
    assert!(h.table_messages().is_empty());
}

#[test]
fn create_outside_runtime_fails() {
    let result = Engine::create(
        &TopologConfig::default(),
        Ports {
            table: Box::new(MemoryTable::new()),
            graph: Arc::new(GraphModel::new()),
            controls: Box::new(StaticControls::default()),
        },
    );

    assert!(matches!(result, Err(EngineError::NoRuntime(_))));
}

/// Controls that render one checkbox per logger and check it on discovery.
#[derive(Default)]
struct CheckboxPanel {
    controls: FilterControls,
    discoveries: Vec<Vec<String>>,
}

impl FilterControlsReader for CheckboxPanel {
    fn read_filter_controls(&self) -> FilterControls {
        self.controls.clone()
    }

    fn loggers_changed(&mut self, registry: &LoggerRegistry, live: &Filter) {
        self.discoveries.push(registry.names().to_vec());
        self.controls.selected_levels = live.selected_levels.clone();
        for name in registry.names() {
            if live.selected_loggers.contains(name) {
                self.controls.selected_logger_names.insert(name.clone());
            }
        }
    }
}

#[tokio::test]
async fn discovered_logger_survives_the_refilter_with_a_custom_reader() {
    let table = Arc::new(Mutex::new(MemoryTable::new()));
    let panel = Arc::new(Mutex::new(CheckboxPanel {
        controls: FilterControls::all_levels(),
        ..CheckboxPanel::default()
    }));
    let mut engine = Engine::create(
        &TopologConfig::default(),
        Ports {
            table: Box::new(Arc::clone(&table)),
            graph: Arc::new(GraphModel::new()),
            controls: Box::new(Arc::clone(&panel)),
        },
    )
    .unwrap();

    engine.dispatch(&log_line(1, "INFO", "a", "first from a"));
    engine.dispatch(&log_line(2, "INFO", "a", "second from a"));
    engine.dispatch(&log_line(3, "WARN", "b", "first from b"));

    assert_eq!(
        table.lock().unwrap().messages(),
        vec!["first from a", "second from a", "first from b"]
    );
    assert_eq!(
        panel.lock().unwrap().discoveries,
        vec![vec!["a".to_owned()], vec!["a".to_owned(), "b".to_owned()]]
    );
}
