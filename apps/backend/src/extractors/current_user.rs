use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::errors::AuthError;
use crate::state::app_state::AppState;

/// Caller identity resolved from the `Authorization: Bearer <token>` header.
///
/// `username` is the display name captured when the token was issued.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}

fn resolve(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let carrier = match req.headers().get(header::AUTHORIZATION) {
        None => None,
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AppError::from(AuthError::MalformedCredential))?,
        ),
    };

    let claims = app_state
        .tokens
        .resolve_claims_from_carrier(carrier)
        .inspect_err(|e| debug!(path = req.path(), reason = %e, "rejected credential"))?;

    Ok(CurrentUser {
        id: claims.subject_id,
        username: claims.subject_name,
    })
}
