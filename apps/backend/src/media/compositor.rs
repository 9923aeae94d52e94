use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, ImageReader, Limits, RgbaImage};
use tracing::{debug, info};

use crate::config::MediaConfig;
use crate::errors::ComposeError;
use crate::media::envelope::{Envelope, MAX_ENCODED_BYTES};
use crate::media::overlay::{composite_centered, DirOverlayStore, Overlay, OverlayStore};
use crate::media::sniff::SniffedType;
use crate::media::storage::{generate_file_name, ArtifactSink, DirArtifactSink};

/// Reference to a persisted, composited PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Forward-slash path of the stored file
    pub path: String,
}

/// Turns an uploaded image envelope plus an optional overlay selector into a
/// stored PNG.
///
/// Each call is self-contained and blocking (decode, encode, file I/O), so a
/// shared instance may be driven from many threads at once.
#[derive(Debug, Clone)]
pub struct MediaCompositor {
    overlays: Arc<dyn OverlayStore>,
    sink: Arc<dyn ArtifactSink>,
}

impl MediaCompositor {
    pub fn new(
        overlays: impl OverlayStore + 'static,
        sink: impl ArtifactSink + 'static,
    ) -> Self {
        Self {
            overlays: Arc::new(overlays),
            sink: Arc::new(sink),
        }
    }

    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(
            DirOverlayStore::new(&config.filters_dir),
            DirArtifactSink::new(&config.uploads_dir),
        )
    }

    /// Validate, decode, overlay and store `raw_image`.
    ///
    /// Stages run in order and stop at the first failure; nothing is written
    /// unless every earlier stage succeeded.
    pub fn compose(
        &self,
        raw_image: &str,
        filter: Option<&str>,
    ) -> Result<StoredImage, ComposeError> {
        let bytes = Envelope::open(raw_image, MAX_ENCODED_BYTES)?;
        let kind = SniffedType::detect(&bytes)?;
        let mut canvas = decode_rgba(&bytes, kind)?;
        debug!(
            ?kind,
            width = canvas.width(),
            height = canvas.height(),
            "decoded upload"
        );

        if let Some(selector) = filter.filter(|s| !s.is_empty()) {
            let overlay = Overlay::from_selector(selector)?;
            if let Some(pixels) = self.overlays.load_overlay(overlay) {
                composite_centered(&mut canvas, &pixels);
                debug!(overlay = overlay.file_name(), "applied overlay");
            }
        }

        let png = encode_png(canvas)?;
        let path = self.sink.store(&generate_file_name(), &png)?;
        info!(path = %path, bytes = png.len(), "stored composited image");

        Ok(StoredImage { path })
    }
}

fn decode_rgba(bytes: &[u8], kind: SniffedType) -> Result<RgbaImage, ComposeError> {
    // Default limits cap decoder allocations; dimensions are not restricted.
    let mut reader = ImageReader::with_format(Cursor::new(bytes), kind.image_format());
    reader.limits(Limits::default());

    reader
        .decode()
        .map(|img| img.to_rgba8())
        .map_err(|e| ComposeError::Decode(e.to_string()))
}

fn encode_png(canvas: RgbaImage) -> Result<Vec<u8>, ComposeError> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| ComposeError::Storage(format!("failed to encode image: {e}")))?;
    Ok(out.into_inner())
}
