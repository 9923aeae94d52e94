//! `"<mime-declaration>,<base64-payload>"` envelopes, as produced by a
//! browser's `canvas.toDataURL()`.

use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::ComposeError;

/// Hard ceiling on the encoded payload, checked before any decoding.
pub const MAX_ENCODED_BYTES: usize = 5 * 1024 * 1024;

const DECLARED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// An envelope split into its declared-type header and encoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub header: &'a str,
    pub payload: &'a str,
}

impl<'a> Envelope<'a> {
    /// Exactly one `,` must separate header and payload.
    pub fn split(raw: &'a str) -> Result<Self, ComposeError> {
        let mut parts = raw.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), None) => Ok(Self { header, payload }),
            _ => Err(ComposeError::MalformedEnvelope),
        }
    }

    /// The header must mention an accepted image type, ignoring case. This
    /// only filters on what the client claims; the bytes are sniffed later.
    pub fn check_declared_type(&self) -> Result<(), ComposeError> {
        let header = self.header.to_ascii_lowercase();
        if DECLARED_IMAGE_TYPES.iter().any(|t| header.contains(t)) {
            Ok(())
        } else {
            Err(ComposeError::unsupported(format!(
                "declared type {:?} is not an accepted image type",
                self.header
            )))
        }
    }

    pub fn check_size(&self, limit: usize) -> Result<(), ComposeError> {
        let size = self.payload.len();
        if size > limit {
            return Err(ComposeError::PayloadTooLarge { size, limit });
        }
        Ok(())
    }

    /// Standard-alphabet base64. CR and LF from line-wrapped payloads are
    /// skipped; any other stray byte is an encoding error.
    pub fn decode_payload(&self) -> Result<Vec<u8>, ComposeError> {
        let payload: Cow<'_, str> = if self.payload.contains(['\r', '\n']) {
            Cow::Owned(self.payload.replace(['\r', '\n'], ""))
        } else {
            Cow::Borrowed(self.payload)
        };

        STANDARD
            .decode(payload.as_bytes())
            .map_err(|e| ComposeError::Encoding(e.to_string()))
    }

    /// Run the envelope stages in order: split, declared type, size, decode.
    pub fn open(raw: &'a str, limit: usize) -> Result<Vec<u8>, ComposeError> {
        let envelope = Self::split(raw)?;
        envelope.check_declared_type()?;
        envelope.check_size(limit)?;
        envelope.decode_payload()
    }
}
