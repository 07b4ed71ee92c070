//! Unit tests for config module
//!
//! Tests configuration types, defaults, and loading from disk.

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::{
    RemoteError,
    config::{LogLevel, RemoteConfig},
};

#[test]
fn config_default() {
    let config = RemoteConfig::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert!(config.player.name.is_none());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [player]
        name = "audacious"
    "#;

    let config: RemoteConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.player.name.as_deref(), Some("audacious"));
}

#[test]
fn config_minimal_toml() {
    let config: RemoteConfig = toml::from_str("[general]").unwrap();

    assert_eq!(config, RemoteConfig::default());
}

#[test]
fn config_rejects_unknown_log_level() {
    let result = toml::from_str::<RemoteConfig>(
        r#"
        [general]
        log_level = "chatty"
    "#,
    );

    assert!(result.is_err());
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let config = RemoteConfig::load_from(&temp.path().join("config.toml")).unwrap();

    assert_eq!(config, RemoteConfig::default());
}

#[test]
fn load_from_reads_player_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[player]\nname = \"vlc\"\n").unwrap();

    let config = RemoteConfig::load_from(&path).unwrap();

    assert_eq!(config.player.name.as_deref(), Some("vlc"));
    assert_eq!(config.general.log_level, LogLevel::Warn);
}

#[test]
fn load_from_reports_parse_errors_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[player\nname = ").unwrap();

    let err = RemoteConfig::load_from(&path).unwrap_err();

    match err {
        RemoteError::TomlParse { location, .. } => assert!(location.ends_with("config.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn log_level_raised_saturates() {
    assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
    assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
    assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
    assert_eq!(LogLevel::Warn.raised(9), LogLevel::Trace);
    assert_eq!(LogLevel::Error.raised(1), LogLevel::Warn);
}

#[test]
fn log_level_display_matches_filter_syntax() {
    assert_eq!(LogLevel::Trace.to_string(), "trace");
    assert_eq!(LogLevel::Error.to_string(), "error");
}
