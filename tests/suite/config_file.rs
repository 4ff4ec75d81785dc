//! Config file loading and how it reaches player-facing text

use std::fs;

use handcount_config::{ConfigError, HandcountConfig};
use handcount_engine::{Resolution, TimeoutResult, feedback_text};

use crate::common::n;

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = HandcountConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn messages_from_file_drive_feedback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nascii_only = true\n\n[messages]\ntimeout = \"Slow! It was {number}.\"\n",
    )
    .unwrap();

    let config = HandcountConfig::load_from(&path).unwrap().unwrap();
    assert!(config.ascii_only());

    let resolution = Resolution::TimedOut(TimeoutResult {
        correct_number: n(6),
    });
    assert_eq!(
        feedback_text(&resolution, &config.messages()),
        "Slow! It was 6."
    );
    assert_eq!(
        config.messages().incorrect(n(6)),
        "Not quite. The answer was 6."
    );
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[messages\ncorrect = 3").unwrap();

    let err = HandcountConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}
