use charadas::config::persistence::SessionStore;
use charadas::config::GameConfig;
use charadas::error;
use charadas::CharadasError;
use std::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_user_friendly_messages() {
    let msg = error::user_friendly_message(&CharadasError::ConfigError("bad".into()));
    assert!(msg.contains("bad"));
    assert!(msg.contains("settings file"));

    let msg = error::user_friendly_message(&CharadasError::PersistenceError("x".into()));
    assert!(msg.contains("session"));
}

#[test]
fn test_io_error_keeps_source() {
    let err: CharadasError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(err.source().is_some());
    assert!(err.to_string().contains("gone"));
}

#[test]
fn test_invalid_config_is_reported_not_clamped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("charadas.toml");
    fs::write(&path, "countdown_seconds = 0\n").unwrap();

    let err = GameConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, CharadasError::ConfigError(_)));
    assert!(err.to_string().contains("Countdown"));
}

#[test]
fn test_corrupt_session_is_persistence_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = SessionStore::at(path).load().unwrap_err();
    assert!(matches!(err, CharadasError::PersistenceError(_)));
}
