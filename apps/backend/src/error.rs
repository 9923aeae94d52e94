use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{AuthError, ComposeError, ErrorCode};

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

/// HTTP-facing error. Component errors convert into it unchanged so the
/// response code can be chosen per kind without string matching.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),
    #[error("Image rejected: {0}")]
    Media(#[from] ComposeError),
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Auth(e) => match e {
                AuthError::MissingCredential => ErrorCode::UnauthorizedMissingBearer,
                AuthError::MalformedCredential => ErrorCode::UnauthorizedMalformedBearer,
                AuthError::InvalidCredential => ErrorCode::UnauthorizedInvalidJwt,
                AuthError::ExpiredCredential => ErrorCode::UnauthorizedExpiredJwt,
                AuthError::SigningFailed(_) => ErrorCode::Internal,
            },
            AppError::Media(e) => match e {
                ComposeError::MalformedEnvelope => ErrorCode::MalformedEnvelope,
                ComposeError::UnsupportedMediaType { .. } => ErrorCode::UnsupportedMediaType,
                ComposeError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
                ComposeError::Encoding(_) => ErrorCode::InvalidEncoding,
                ComposeError::Decode(_) => ErrorCode::UndecodableImage,
                ComposeError::InvalidFilter(_) => ErrorCode::InvalidFilter,
                ComposeError::Storage(_) => ErrorCode::StorageError,
            },
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-readable detail. Server-side failures are not echoed to clients.
    fn detail(&self) -> String {
        match self {
            AppError::Auth(AuthError::SigningFailed(_)) => "Internal server error".to_string(),
            AppError::Auth(e) => e.to_string(),
            AppError::Media(ComposeError::Storage(_)) => "Failed to store image".to_string(),
            AppError::Media(e) => e.to_string(),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(e) if e.is_client_error() => StatusCode::UNAUTHORIZED,
            AppError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Media(e) => match e {
                ComposeError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ComposeError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                ComposeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
        }

        let problem_details = ProblemDetails {
            type_: format!("urn:photobooth:error:{}", code.to_lowercase()),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}
