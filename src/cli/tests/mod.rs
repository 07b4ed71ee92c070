//! Unit tests for CLI module
//!
//! Tests command registry, formatting, and error mapping.
//! No bus access - commands are never executed here.

use crate::{
    cli::{CliError, CommandRegistry, formatting::format_player_list},
    services::mpris::MediaError,
};

#[test]
fn registry_lists_every_builtin_command() {
    let registry = CommandRegistry::with_builtin_commands();

    let commands = registry.list_commands();

    for expected in [
        "identity", "quit", "prev", "next", "stop", "play", "pause", "volume", "seek", "status",
        "playstatus", "trackinfo", "position", "numtracks", "tracknum", "addtrack", "deltrack",
        "loop", "random", "repeat",
    ] {
        assert!(commands.contains(&expected.to_string()), "missing {expected}");
    }
}

#[test]
fn aliases_resolve_but_are_not_listed() {
    let registry = CommandRegistry::with_builtin_commands();

    assert!(registry.contains("previous"));
    assert!(registry.contains("prev"));
    assert!(!registry.list_commands().contains(&"previous".to_string()));
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = CommandRegistry::new();

    assert!(registry.list_commands().is_empty());
    assert!(!registry.contains("play"));
}

#[test]
fn help_text_shows_usage_and_aliases() {
    let help = CommandRegistry::with_builtin_commands().help_text();

    assert!(help.contains("volume <level:n>"));
    assert!(help.contains("addtrack <uri:text> [play-now:true|false]"));
    assert!(help.contains("(alias: previous)"));
}

#[test]
fn exit_codes_distinguish_error_kinds() {
    let codes = [
        CliError::BadUserInput("x".to_string()).exit_code(),
        CliError::from(MediaError::NoPlayersRunning).exit_code(),
        CliError::from(MediaError::RequestedPlayerNotRunning {
            requested: "bar".to_string(),
            running: vec!["org.mpris.foo".to_string()],
        })
        .exit_code(),
        CliError::from(MediaError::AmbiguousPlayerSelection {
            running: vec!["org.mpris.a".to_string(), "org.mpris.b".to_string()],
        })
        .exit_code(),
        CliError::from(MediaError::UnexpectedReply {
            method: "GetStatus".to_string(),
            details: "x".to_string(),
        })
        .exit_code(),
    ];

    for (i, code) in codes.iter().enumerate() {
        assert_ne!(*code, 0);
        assert!(!codes[i + 1..].contains(code), "exit code {code} reused");
    }
}

#[test]
fn player_list_formatting() {
    let players = vec!["org.mpris.a".to_string(), "org.mpris.b".to_string()];

    assert_eq!(format_player_list(&players), "  org.mpris.a\n  org.mpris.b\n");
    assert_eq!(format_player_list(&[]), "  (none)\n");
}
