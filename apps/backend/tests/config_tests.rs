//! Environment-driven configuration. These tests mutate process env and run
//! serially.
//!
//! Run:
//!   cargo test --test config_tests

mod common;

use std::path::PathBuf;

use photobooth_backend::{AppConfig, AppError, AppState, MediaConfig};
use serial_test::serial;

const KEYS: [&str; 3] = ["BACKEND_JWT_SECRET", "UPLOADS_DIR", "FILTERS_DIR"];

/// Restores the touched variables when dropped.
struct EnvGuard(Vec<(&'static str, Option<String>)>);

impl EnvGuard {
    fn capture() -> Self {
        Self(KEYS.iter().map(|k| (*k, std::env::var(k).ok())).collect())
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.0 {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn missing_secret_is_a_startup_error() {
    let _guard = EnvGuard::capture();
    std::env::remove_var("BACKEND_JWT_SECRET");

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));
}

#[test]
#[serial]
fn blank_secret_is_a_startup_error() {
    let _guard = EnvGuard::capture();
    std::env::set_var("BACKEND_JWT_SECRET", "   ");

    assert!(matches!(
        AppConfig::from_env(),
        Err(AppError::Config { .. })
    ));
}

#[test]
#[serial]
fn media_dirs_default_when_unset() {
    let _guard = EnvGuard::capture();
    std::env::remove_var("UPLOADS_DIR");
    std::env::set_var("FILTERS_DIR", "");

    assert_eq!(MediaConfig::from_env(), MediaConfig::default());
    assert_eq!(MediaConfig::default().uploads_dir, PathBuf::from("uploads"));
    assert_eq!(MediaConfig::default().filters_dir, PathBuf::from("filters"));
}

#[test]
#[serial]
fn full_config_builds_working_state() {
    let _guard = EnvGuard::capture();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("BACKEND_JWT_SECRET", "config-test-secret");
    std::env::set_var("UPLOADS_DIR", dir.path().join("up"));
    std::env::set_var("FILTERS_DIR", dir.path().join("fx"));

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.media.uploads_dir, dir.path().join("up"));
    assert_eq!(config.security.jwt_secret, b"config-test-secret");

    let state = AppState::from_config(&config).unwrap();
    let token = state.tokens.issue(11, "cfg").unwrap();
    assert_eq!(state.tokens.verify(&token).unwrap().subject_id, 11);
}
