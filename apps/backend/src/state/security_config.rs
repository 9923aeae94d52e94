use jsonwebtoken::Algorithm;
use rand::TryRngCore;

use crate::error::AppError;

pub const JWT_SECRET_ENV: &str = "BACKEND_JWT_SECRET";

/// Configuration for JWT security settings
#[derive(Clone)]
pub struct SecurityConfig {
    /// Symmetric key for signing and verifying session tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Load the signing key from `BACKEND_JWT_SECRET`.
    ///
    /// A missing or blank key is a startup failure.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var(JWT_SECRET_ENV)
            .map_err(|_| AppError::config(format!("{JWT_SECRET_ENV} must be set")))?;
        let config = Self::new(secret.into_bytes());
        if config.is_blank() {
            return Err(AppError::config(format!("{JWT_SECRET_ENV} must not be empty")));
        }
        Ok(config)
    }

    /// Fresh 32-byte random key from the OS RNG.
    pub fn random() -> Result<Self, AppError> {
        let mut key = vec![0u8; 32];
        rand::rngs::OsRng
            .try_fill_bytes(&mut key)
            .map_err(|e| AppError::internal(format!("OS RNG unavailable: {e}")))?;
        Ok(Self::new(key))
    }

    /// True when the key is empty or only ASCII whitespace. Such a key is
    /// rejected at startup wherever it comes from.
    pub fn is_blank(&self) -> bool {
        self.jwt_secret.iter().all(u8::is_ascii_whitespace)
    }
}
