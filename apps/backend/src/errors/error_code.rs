//! Error codes for the photobooth backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the photobooth backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// No Authorization header
    UnauthorizedMissingBearer,
    /// Authorization header without the `Bearer ` scheme
    UnauthorizedMalformedBearer,
    /// Token failed to parse or verify
    UnauthorizedInvalidJwt,
    /// Token verified but has expired
    UnauthorizedExpiredJwt,

    // Upload validation
    /// Image envelope is not `<header>,<payload>`
    MalformedEnvelope,
    /// Declared or sniffed type is not PNG/JPEG
    UnsupportedMediaType,
    PayloadTooLarge,
    /// Payload is not valid base64
    InvalidEncoding,
    /// Bytes look like an image but do not decode
    UndecodableImage,
    /// Overlay name is not on the allow-list
    InvalidFilter,

    // System Errors
    /// Persisting the composited image failed
    StorageError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedMalformedBearer => "UNAUTHORIZED_MALFORMED_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::MalformedEnvelope => "MALFORMED_ENVELOPE",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InvalidEncoding => "INVALID_ENCODING",
            Self::UndecodableImage => "UNDECODABLE_IMAGE",
            Self::InvalidFilter => "INVALID_FILTER",

            Self::StorageError => "STORAGE_ERROR",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
