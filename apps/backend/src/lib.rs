#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Core services of the photobooth backend: stateless session tokens and the
//! upload compositing pipeline, plus the request extractor that ties them to
//! actix-web.

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod media;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::jwt::{TokenAuthority, SESSION_TTL};
pub use auth::{generate_verification_token, Clock, FixedClock, SessionClaims, SystemClock};
pub use config::{AppConfig, MediaConfig};
pub use error::AppError;
pub use errors::{AuthError, ComposeError, ErrorCode};
pub use extractors::current_user::CurrentUser;
pub use media::{MediaCompositor, Overlay, StoredImage, MAX_ENCODED_BYTES};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
