use crate::filter::{Filter, FilterControls, LoggerRegistry};
use crate::ports::FilterControlsReader;
use crate::record::Level;
use crate::render::StaticControls;
use pretty_assertions::assert_eq;

#[test]
fn default_selects_every_log_level() {
    let controls = StaticControls::default().read_filter_controls();

    assert_eq!(controls, FilterControls::all_levels());
    assert!(!controls.selected_levels.contains(&Level::Event));
}

#[test]
fn discovered_loggers_are_checked_when_live_filter_selects_them() {
    let mut controls = StaticControls::default();
    let mut registry = LoggerRegistry::new();
    registry.register("a");
    registry.register("b");

    let mut live = Filter::default();
    live.selected_loggers.insert("b".into());

    controls.loggers_changed(&registry, &live);

    let read = controls.read_filter_controls();
    assert!(read.selected_logger_names.contains("b"));
    assert!(!read.selected_logger_names.contains("a"));
}

#[test]
fn setters_change_what_is_read() {
    let mut controls = StaticControls::new([Level::Info], "x");
    controls.select_logger("a");
    controls.set_levels([Level::Error, Level::Warn]);
    controls.set_search("needle");
    controls.deselect_logger("a");

    let read = controls.read_filter_controls();
    assert_eq!(read.search_text, "needle");
    assert_eq!(read.selected_levels.len(), 2);
    assert!(read.selected_logger_names.is_empty());
}
