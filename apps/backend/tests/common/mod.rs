#![allow(dead_code)]

// tests/common/mod.rs
use photobooth_backend::{AppState, MediaCompositor, MediaConfig};
use tempfile::TempDir;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes `common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Uploads and filters directories that live as long as the value.
pub struct MediaDirs {
    pub root: TempDir,
    pub config: MediaConfig,
}

impl MediaDirs {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp media root");
        let filters_dir = root.path().join("filters");
        std::fs::create_dir_all(&filters_dir).expect("create filters dir");
        let config = MediaConfig {
            uploads_dir: root.path().join("uploads"),
            filters_dir,
        };
        Self { root, config }
    }

    pub fn compositor(&self) -> MediaCompositor {
        MediaCompositor::from_config(&self.config)
    }

    pub fn app_state(&self) -> AppState {
        AppState::for_tests(&self.config).expect("build test state")
    }

    /// Number of files currently in the uploads directory.
    pub fn stored_count(&self) -> usize {
        match std::fs::read_dir(&self.config.uploads_dir) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }
}
