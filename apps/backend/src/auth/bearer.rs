use crate::errors::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Strip the exact `Bearer ` prefix from an `Authorization` header value.
///
/// A missing or empty header is `MissingCredential`. Anything without the
/// literal prefix, including a bare token, is `MalformedCredential`.
pub fn parse_bearer(carrier: Option<&str>) -> Result<&str, AuthError> {
    let value = match carrier {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::MissingCredential),
    };

    value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedCredential)
}
