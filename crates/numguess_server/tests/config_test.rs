//! Tests for layered server configuration.

use numguess::Difficulty;
use numguess_server::ServerConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(*config.default_difficulty(), Difficulty::Easy);
    assert_eq!(*config.seed(), None);
    assert!(*config.cors());
    assert_eq!(config.bind_addr(), "127.0.0.1:3000");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ServerConfig::load_or_default(dir.path().join("absent.toml"))
        .expect("Missing file should not fail");
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_file_values_with_partial_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("numguess.toml");
    fs::write(
        &path,
        r#"port = 8080
default_difficulty = "hard"
seed = 7
"#,
    )
    .expect("Write failed");

    let config = ServerConfig::load_or_default(&path).expect("Load failed");
    assert_eq!(*config.port(), 8080);
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.default_difficulty(), Difficulty::Hard);
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "port = \"not a number\"").expect("Write failed");

    let err = ServerConfig::from_file(&path).expect_err("Should fail to parse");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_port_var_and_overrides() {
    let config = ServerConfig::default()
        .with_port_var(Some("4100"))
        .expect("Valid port");
    assert_eq!(*config.port(), 4100);

    let config = config.with_overrides(Some("0.0.0.0".to_string()), Some(5000), Some(3), None);
    assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    assert_eq!(*config.seed(), Some(3));
    assert_eq!(*config.default_difficulty(), Difficulty::Easy);

    assert!(ServerConfig::default().with_port_var(Some("http")).is_err());
    assert_eq!(
        ServerConfig::default().with_port_var(None).expect("No var"),
        ServerConfig::default()
    );
}
