//! Process configuration loaded once at startup from the environment.

pub mod media;

pub use media::MediaConfig;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Everything needed to build an [`AppState`](crate::state::app_state::AppState).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub security: SecurityConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    /// Read `BACKEND_JWT_SECRET`, `UPLOADS_DIR` and `FILTERS_DIR`.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            security: SecurityConfig::from_env()?,
            media: MediaConfig::from_env(),
        })
    }
}
