use std::env;
use std::path::PathBuf;

pub const UPLOADS_DIR_ENV: &str = "UPLOADS_DIR";
pub const FILTERS_DIR_ENV: &str = "FILTERS_DIR";

const DEFAULT_UPLOADS_DIR: &str = "uploads";
const DEFAULT_FILTERS_DIR: &str = "filters";

/// Where composited images are written and overlay assets are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    pub uploads_dir: PathBuf,
    pub filters_dir: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            uploads_dir: PathBuf::from(DEFAULT_UPLOADS_DIR),
            filters_dir: PathBuf::from(DEFAULT_FILTERS_DIR),
        }
    }
}

impl MediaConfig {
    /// Unset or blank variables fall back to `uploads` / `filters`.
    pub fn from_env() -> Self {
        Self {
            uploads_dir: dir_from_env(UPLOADS_DIR_ENV, DEFAULT_UPLOADS_DIR),
            filters_dir: dir_from_env(FILTERS_DIR_ENV, DEFAULT_FILTERS_DIR),
        }
    }
}

fn dir_from_env(key: &str, default: &str) -> PathBuf {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => PathBuf::from(default),
    }
}
