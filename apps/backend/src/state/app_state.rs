use std::sync::Arc;

use tracing::error;

use super::security_config::SecurityConfig;
use crate::auth::jwt::TokenAuthority;
use crate::config::{AppConfig, MediaConfig};
use crate::error::AppError;
use crate::media::compositor::{MediaCompositor, StoredImage};

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session token issuance and verification
    pub tokens: TokenAuthority,
    /// Upload validation and compositing
    pub compositor: Arc<MediaCompositor>,
}

impl AppState {
    pub fn new(tokens: TokenAuthority, compositor: MediaCompositor) -> Self {
        Self {
            tokens,
            compositor: Arc::new(compositor),
        }
    }

    /// Build services from loaded configuration. Fails on an empty key.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self::new(
            TokenAuthority::new(&config.security)?,
            MediaCompositor::from_config(&config.media),
        ))
    }

    /// Run the blocking compositing pipeline on tokio's blocking pool.
    pub async fn compose_image(
        &self,
        raw_image: String,
        filter: Option<String>,
    ) -> Result<StoredImage, AppError> {
        let compositor = Arc::clone(&self.compositor);
        tokio::task::spawn_blocking(move || compositor.compose(&raw_image, filter.as_deref()))
            .await
            .map_err(|e| {
                error!(error = %e, "compose worker did not complete");
                AppError::internal(format!("compose worker failed: {e}"))
            })?
            .map_err(AppError::from)
    }

    /// State with a random signing key and the given media directories.
    pub fn for_tests(media: &MediaConfig) -> Result<Self, AppError> {
        Self::from_config(&AppConfig {
            security: SecurityConfig::random()?,
            media: media.clone(),
        })
    }
}
