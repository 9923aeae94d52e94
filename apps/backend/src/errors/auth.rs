//! Failures raised while issuing or checking session tokens.

use thiserror::Error;

/// Closed set of credential failures.
///
/// The first four are caller-facing and must stay distinct from each other;
/// `ExpiredCredential` in particular lets a client prompt for a fresh login
/// instead of showing a generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header at all (or an empty one).
    #[error("authorization header required")]
    MissingCredential,
    /// Header present but not of the form `Bearer <token>`.
    #[error("invalid authorization format")]
    MalformedCredential,
    /// Token could not be parsed or its signature does not verify.
    #[error("invalid token")]
    InvalidCredential,
    /// Signature verifies but the claim's expiry has passed.
    #[error("token expired")]
    ExpiredCredential,
    /// The signing primitive itself failed. Internal, never caller-facing.
    #[error("failed to sign token: {0}")]
    SigningFailed(String),
}

impl AuthError {
    /// True for every kind the caller caused; false for internal failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::SigningFailed(_))
    }
}
