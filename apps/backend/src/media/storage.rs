//! Durable storage for composited images.

use std::fmt::Debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::error;
use uuid::Uuid;

use crate::errors::ComposeError;

/// Destination for encoded PNG artifacts.
pub trait ArtifactSink: Debug + Send + Sync {
    /// Persist `png` under `file_name` and return the stored path with
    /// forward slashes.
    fn store(&self, file_name: &str, png: &[u8]) -> Result<String, ComposeError>;
}

/// Random, collision-resistant artifact name. Never derived from input.
pub fn generate_file_name() -> String {
    format!("{}.png", Uuid::new_v4())
}

/// Writes artifacts into a single directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirArtifactSink {
    root: PathBuf,
}

impl DirArtifactSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirArtifactSink {
    fn store(&self, file_name: &str, png: &[u8]) -> Result<String, ComposeError> {
        if file_name.is_empty()
            || file_name.contains(['/', '\\'])
            || file_name == "."
            || file_name == ".."
        {
            return Err(ComposeError::Storage(format!(
                "refusing to store under {file_name:?}"
            )));
        }

        fs::create_dir_all(&self.root).map_err(|e| {
            error!(dir = %self.root.display(), error = %e, "failed to create uploads directory");
            ComposeError::Storage(format!("failed to create uploads directory: {e}"))
        })?;

        let path = self.root.join(file_name);

        // create_new: an existing file is never overwritten.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                error!(path = %path.display(), error = %e, "failed to create image file");
                ComposeError::Storage(format!("failed to create image file: {e}"))
            })?;

        if let Err(e) = file.write_all(png).and_then(|()| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&path);
            error!(path = %path.display(), error = %e, "failed to write image file");
            return Err(ComposeError::Storage(format!(
                "failed to write image file: {e}"
            )));
        }

        Ok(path.to_string_lossy().replace('\\', "/"))
    }
}
