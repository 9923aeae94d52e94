//! Decorative overlays ("filters") drawn over an uploaded photo.

use std::fmt::Debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{imageops, ImageError, RgbaImage};
use tracing::warn;

use crate::errors::ComposeError;

/// The fixed set of overlays a client may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Fire,
    ThumbsUp,
    Camera,
    Lightning,
    Cool,
    Heart,
    Star,
    Smile,
}

impl Overlay {
    pub const ALL: [Overlay; 8] = [
        Overlay::Fire,
        Overlay::ThumbsUp,
        Overlay::Camera,
        Overlay::Lightning,
        Overlay::Cool,
        Overlay::Heart,
        Overlay::Star,
        Overlay::Smile,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Overlay::Fire => "fire.png",
            Overlay::ThumbsUp => "thumbs-up.png",
            Overlay::Camera => "camera.png",
            Overlay::Lightning => "lightning.png",
            Overlay::Cool => "cool.png",
            Overlay::Heart => "heart.png",
            Overlay::Star => "star.png",
            Overlay::Smile => "smile.png",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.file_name() == name)
    }

    /// Resolve a client-supplied selector. Directory components are dropped
    /// before the allow-list lookup, so `../../etc/passwd` is looked up as
    /// `passwd` and rejected.
    pub fn from_selector(selector: &str) -> Result<Self, ComposeError> {
        let base = selector
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();

        Self::from_file_name(base)
            .ok_or_else(|| ComposeError::InvalidFilter(selector.to_string()))
    }
}

/// Read-only lookup of overlay pixel data.
pub trait OverlayStore: Debug + Send + Sync {
    /// `None` when the asset is unavailable; compositing then proceeds
    /// without an overlay.
    fn load_overlay(&self, overlay: Overlay) -> Option<RgbaImage>;
}

/// Overlays stored as PNG files under one directory.
#[derive(Debug, Clone)]
pub struct DirOverlayStore {
    root: PathBuf,
}

impl DirOverlayStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OverlayStore for DirOverlayStore {
    fn load_overlay(&self, overlay: Overlay) -> Option<RgbaImage> {
        let path = self.root.join(overlay.file_name());
        match image::open(&path) {
            Ok(img) => Some(img.to_rgba8()),
            Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    overlay = overlay.file_name(),
                    dir = %self.root.display(),
                    "overlay asset missing; composing without it"
                );
                None
            }
            Err(e) => {
                warn!(
                    overlay = overlay.file_name(),
                    path = %path.display(),
                    error = %e,
                    "overlay asset unreadable; composing without it"
                );
                None
            }
        }
    }
}

/// Alpha-blend `overlay` onto the centre of `base`. Overlays larger than the
/// base are clipped.
pub fn composite_centered(base: &mut RgbaImage, overlay: &RgbaImage) {
    let x = (i64::from(base.width()) - i64::from(overlay.width())) / 2;
    let y = (i64::from(base.height()) - i64::from(overlay.height())) / 2;
    imageops::overlay(base, overlay, x, y);
}
