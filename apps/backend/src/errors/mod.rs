//! Error handling for the photobooth backend.

pub mod auth;
pub mod error_code;
pub mod media;

pub use auth::AuthError;
pub use error_code::ErrorCode;
pub use media::ComposeError;
