//! Tests for loading server configuration.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_server::{RegistryLimits, ServerConfig, build_registry};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_defaults() {
    let config = ServerConfig::load(None).expect("Defaults are valid");
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 5000);
    assert_eq!(*config.board_size(), 4);
    assert_eq!(config.board_seed(), &None);
    assert_eq!(
        config.limits(),
        RegistryLimits::new(Some(10_000), Some(Duration::from_secs(3600)))
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("port = 8080\ndictionary_path = \"words.txt\"\n");
    let config = ServerConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.port(), 8080);
    assert_eq!(config.dictionary_path(), &PathBuf::from("words.txt"));
    assert_eq!(config.host(), "127.0.0.1");
}

#[test]
fn test_zero_limits_disable_eviction() {
    let file = write_config("max_sessions = 0\nsession_idle_ttl_secs = 0\n");
    let config = ServerConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(config.limits(), RegistryLimits::new(None, None));
}

#[test]
fn test_unknown_key_is_rejected() {
    let file = write_config("prot = 8080\n");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_board_size_is_rejected() {
    let file = write_config("board_size = 0\n");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("board_size"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = ServerConfig::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_setters_override() {
    let config = ServerConfig::default()
        .with_port(9000)
        .with_host("0.0.0.0".to_string());
    assert_eq!(*config.port(), 9000);
    assert_eq!(config.host(), "0.0.0.0");
}

#[test]
fn test_seeded_config_gives_reproducible_boards() {
    let file = write_config("board_seed = 1234\nboard_size = 5\n");
    let config = ServerConfig::from_file(file.path()).expect("Config should load");

    let first = build_registry(&config);
    let second = build_registry(&config);
    let (_, a) = first.create();
    let (_, b) = second.create();
    assert_eq!(a.board, b.board);
    assert_eq!(a.board.size(), 5);
}

#[test]
fn test_missing_dictionary_degrades_to_empty() {
    let config = ServerConfig::default().with_dictionary_path(PathBuf::from("/no/such/words.txt"));
    let registry = build_registry(&config);
    assert!(registry.dictionary().is_empty());
}

#[test]
fn test_dictionary_file_is_loaded() {
    let words = write_config("Cat\n dog \n\nBIRD\n");
    let config = ServerConfig::default().with_dictionary_path(words.path().to_path_buf());
    let registry = build_registry(&config);
    assert_eq!(registry.dictionary().len(), 3);
    assert!(registry.dictionary().contains("bird"));
}

#[test]
fn test_oversized_board_is_rejected() {
    let file = write_config("board_size = 17\n");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("at most 16"));

    let file = write_config("board_size = 16\n");
    assert!(ServerConfig::from_file(file.path()).is_ok());
}

#[test]
fn test_absolute_dictionary_path_is_unchanged() {
    let config = ServerConfig::default().with_dictionary_path(PathBuf::from("/no/such/words.txt"));
    assert_eq!(
        config.resolved_dictionary_path(),
        PathBuf::from("/no/such/words.txt")
    );
}

#[test]
fn test_relative_dictionary_found_next_to_executable() {
    let exe_dir = std::env::current_exe()
        .expect("Test binary path")
        .parent()
        .expect("Test binary directory")
        .to_path_buf();
    let name = format!("boggle_words_{}.txt", std::process::id());
    let beside = exe_dir.join(&name);
    std::fs::write(&beside, "cat\ndog\n").expect("Failed to write word list");

    let config = ServerConfig::default().with_dictionary_path(PathBuf::from(&name));
    let resolved = config.resolved_dictionary_path();
    let registry = build_registry(&config);
    std::fs::remove_file(&beside).expect("Failed to remove word list");

    assert_eq!(resolved, beside);
    assert_eq!(registry.dictionary().len(), 2);
}

#[test]
fn test_unresolvable_relative_dictionary_is_unchanged() {
    let config = ServerConfig::default().with_dictionary_path(PathBuf::from("no_such_words.txt"));
    assert_eq!(
        config.resolved_dictionary_path(),
        PathBuf::from("no_such_words.txt")
    );
}
