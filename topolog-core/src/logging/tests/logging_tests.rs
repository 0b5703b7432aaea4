use crate::logging::{Diagnostics, LogMode, env_filter};
use pretty_assertions::assert_eq;

#[test]
fn console_is_selected_only_when_requested() {
    assert_eq!(Diagnostics::select(true), Diagnostics::Console);
    assert_eq!(Diagnostics::select(false), Diagnostics::Json);
}

#[test]
fn table_redraws_only_on_a_terminal() {
    assert_eq!(LogMode::resolve(false, true), LogMode::Pretty);
    assert_eq!(LogMode::resolve(false, false), LogMode::Plain);
    assert_eq!(LogMode::resolve(true, true), LogMode::Plain);
}

#[test]
fn filter_falls_back_to_info() {
    assert_eq!(env_filter(None).to_string(), "info");
    assert_eq!(env_filter(Some("topolog_core=debug")).to_string(), "topolog_core=debug");
}
