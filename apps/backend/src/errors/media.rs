//! Failures raised by the image compositing pipeline.

use thiserror::Error;

/// One variant per pipeline stage that can reject an upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Unknown image format")]
    MalformedEnvelope,
    #[error("Only PNG and JPEG images are allowed")]
    UnsupportedMediaType { detail: String },
    #[error("Image size exceeds maximum allowed size (5MB): {size} > {limit} encoded bytes")]
    PayloadTooLarge { size: usize, limit: usize },
    #[error("Invalid base64 data: {0}")]
    Encoding(String),
    #[error("Image not decoded: {0}")]
    Decode(String),
    #[error("Invalid filter name: {0}")]
    InvalidFilter(String),
    #[error("Failed to store image: {0}")]
    Storage(String),
}

impl ComposeError {
    pub fn unsupported(detail: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            detail: detail.into(),
        }
    }

    /// True when the request itself was at fault; only storage failures are
    /// attributed to the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ComposeError::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_storage_is_server_side() {
        assert!(ComposeError::MalformedEnvelope.is_client_error());
        assert!(ComposeError::unsupported("text/plain").is_client_error());
        assert!(ComposeError::PayloadTooLarge { size: 2, limit: 1 }.is_client_error());
        assert!(ComposeError::Encoding("bad".into()).is_client_error());
        assert!(ComposeError::Decode("bad".into()).is_client_error());
        assert!(ComposeError::InvalidFilter("x".into()).is_client_error());
        assert!(!ComposeError::Storage("disk full".into()).is_client_error());
    }
}
