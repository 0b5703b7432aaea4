use crate::cli::conf::{config_error_hint, summary, write_template};
use crate::conf::{TopologConfig, load_config, parse_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn starter_template_matches_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("topolog.hcl");

    write_template(&path).unwrap();

    assert_eq!(load_config(&path).unwrap(), TopologConfig::default());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("topolog.hcl");
    fs::write(&path, "buffer {\n  capacity = 5\n}\n").unwrap();

    assert!(write_template(&path).is_err());
    assert_eq!(load_config(&path).unwrap().buffer.capacity, 5);
}

#[test]
fn summary_names_the_source() {
    let lines = summary(&TopologConfig::default());

    assert_eq!(lines[0], "Config loaded successfully");
    assert!(lines.iter().any(|l| l == "buffer capacity: 150"));
    assert!(lines.contains(&"source: websocket ws://localhost:3000/logs".to_owned()));
}

#[test]
fn missing_file_hints_at_init() {
    let err = load_config(Path::new("/definitely/not/here.hcl")).unwrap_err();

    assert!(config_error_hint(&err).unwrap().contains("topolog config init"));
}

#[test]
fn bad_alias_hints_at_canonical_names() {
    let src = "events {\n  aliases = {\n    up = \"nope\"\n  }\n}\n";
    let err = parse_config(src, Path::new("inline.hcl")).unwrap_err();

    assert!(config_error_hint(&err).unwrap().contains("canonical event names"));
}
