//! Validation, decoding, overlay compositing and persistence of uploaded
//! images.

pub mod compositor;
pub mod envelope;
pub mod overlay;
pub mod sniff;
pub mod storage;

pub use compositor::{MediaCompositor, StoredImage};
pub use envelope::{Envelope, MAX_ENCODED_BYTES};
pub use overlay::{DirOverlayStore, Overlay, OverlayStore};
pub use sniff::SniffedType;
pub use storage::{ArtifactSink, DirArtifactSink};
