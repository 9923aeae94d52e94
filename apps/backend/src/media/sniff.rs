use image::ImageFormat;

use crate::errors::ComposeError;

/// Image type established from the bytes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffedType {
    Png,
    Jpeg,
}

impl SniffedType {
    /// Inspect magic bytes; anything other than PNG or JPEG is rejected even
    /// when the envelope declared an image type.
    pub fn detect(bytes: &[u8]) -> Result<Self, ComposeError> {
        match image::guess_format(bytes) {
            Ok(ImageFormat::Png) => Ok(Self::Png),
            Ok(ImageFormat::Jpeg) => Ok(Self::Jpeg),
            Ok(other) => Err(ComposeError::unsupported(format!(
                "content is {other:?}, not PNG or JPEG"
            ))),
            Err(_) => Err(ComposeError::unsupported("content is not a recognised image")),
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_png_and_jpeg_signatures() {
        assert_eq!(
            SniffedType::detect(b"\x89PNG\r\n\x1a\nrest"),
            Ok(SniffedType::Png)
        );
        assert_eq!(
            SniffedType::detect(b"\xff\xd8\xff\xe0rest"),
            Ok(SniffedType::Jpeg)
        );
    }

    #[test]
    fn rejects_text_and_other_images() {
        assert!(SniffedType::detect(b"hello").is_err());
        assert!(SniffedType::detect(b"GIF89a......").is_err());
        assert!(SniffedType::detect(b"").is_err());
    }
}
