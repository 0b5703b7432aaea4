use crate::buffer::LogBuffer;
use crate::filter::{Filter, FilterControls, FilterEngine};
use crate::record::{Level, LogRecord};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn register_logger_returns_true_only_once() {
    let mut engine = FilterEngine::default();

    assert!(engine.register_logger("broker"));
    assert!(!engine.register_logger("broker"));
    assert!(engine.register_logger("client"));
    assert!(!engine.register_logger("client"));

    assert_eq!(engine.registry().names(), &["broker", "client"]);
}

#[test]
fn new_logger_is_enrolled_into_live_filter() {
    let mut engine = FilterEngine::new(Filter::recompute(&FilterControls::all_levels()));

    engine.register_logger("broker");

    assert!(engine.filter().selected_loggers.contains("broker"));
}

#[test]
fn registry_survives_recompute() {
    let mut engine = FilterEngine::default();
    engine.register_logger("broker");

    engine.recompute(&FilterControls::all_levels());

    assert!(engine.registry().contains("broker"));
    assert!(!engine.filter().selected_loggers.contains("broker"));
}

#[test]
fn apply_uses_live_filter() {
    let mut buffer = LogBuffer::new(4);
    buffer.append(Arc::new(LogRecord::new(0, Level::Info, "a", "one")));
    buffer.append(Arc::new(LogRecord::new(1, Level::Error, "a", "two")));

    let mut engine = FilterEngine::default();
    engine.recompute(
        &FilterControls::default()
            .with_levels([Level::Error])
            .with_loggers(["a"]),
    );

    let rows = engine.apply(&buffer);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message, "two");
}
