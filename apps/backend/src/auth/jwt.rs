use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::auth::bearer::parse_bearer;
use crate::auth::claims::{unix_seconds, SessionClaims};
use crate::auth::clock::{Clock, SystemClock};
use crate::error::AppError;
use crate::errors::AuthError;
use crate::state::security_config::SecurityConfig;

/// Fixed lifetime of every session token.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Mints and verifies HS256 session tokens.
///
/// Holds no mutable state: the key is fixed at construction, so one instance
/// can be shared across any number of concurrent requests.
#[derive(Clone)]
pub struct TokenAuthority {
    encoding: EncodingKey,
    decoding: DecodingKey,
    header: Header,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("algorithm", &self.header.alg)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl TokenAuthority {
    /// Build an authority around the configured key. An empty key is a
    /// configuration error.
    pub fn new(security: &SecurityConfig) -> Result<Self, AppError> {
        if security.is_blank() {
            return Err(AppError::config("JWT signing key must not be blank"));
        }

        // Pin the algorithm; expiry is checked against our own clock so that
        // "at or after exp" is rejected exactly and tests can move time.
        let mut validation = Validation::new(security.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(&security.jwt_secret),
            decoding: DecodingKey::from_secret(&security.jwt_secret),
            header: Header::new(security.algorithm),
            validation,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Mint a token for `subject_id` that expires one hour from now.
    pub fn issue(&self, subject_id: i64, subject_name: &str) -> Result<String, AuthError> {
        let iat = unix_seconds(self.clock.now());
        let claims = SessionClaims {
            subject_id,
            subject_name: subject_name.to_string(),
            iat,
            exp: iat + SESSION_TTL.as_secs() as i64,
        };

        let token = encode(&self.header, &claims, &self.encoding)
            .map_err(|e| AuthError::SigningFailed(e.to_string()))?;

        debug!(subject_id, exp = claims.exp, "issued session token");
        Ok(token)
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let claims = decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "rejected session token");
                AuthError::InvalidCredential
            })?;

        let now = unix_seconds(self.clock.now());
        if now >= claims.exp {
            debug!(subject_id = claims.subject_id, exp = claims.exp, "session token expired");
            return Err(AuthError::ExpiredCredential);
        }

        Ok(claims)
    }

    /// Resolve an `Authorization` header value to the claims it carries.
    pub fn resolve_claims_from_carrier(
        &self,
        carrier: Option<&str>,
    ) -> Result<SessionClaims, AuthError> {
        let token = parse_bearer(carrier)?;
        self.verify(token)
    }

    /// Resolve an `Authorization` header value to the subject id it carries.
    pub fn resolve_from_carrier(&self, carrier: Option<&str>) -> Result<i64, AuthError> {
        self.resolve_claims_from_carrier(carrier)
            .map(|claims| claims.subject_id)
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;
    use crate::auth::clock::FixedClock;

    fn authority(secret: &str) -> TokenAuthority {
        TokenAuthority::new(&SecurityConfig::new(secret.as_bytes())).unwrap()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let now = SystemTime::now();
        let tokens = authority("test_secret_key_for_testing_purposes_only")
            .with_clock(FixedClock(now));

        let token = tokens.issue(42, "ada").unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.subject_id, 42);
        assert_eq!(claims.subject_name, "ada");
        assert_eq!(claims.iat, unix_seconds(now));
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_expired_token() {
        let issued = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
        let minter = authority("secret").with_clock(FixedClock(issued));
        let token = minter.issue(1, "old").unwrap();

        assert_eq!(
            authority("secret").verify(&token),
            Err(AuthError::ExpiredCredential)
        );
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let issued = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let token = authority("secret")
            .with_clock(FixedClock(issued))
            .issue(1, "edge")
            .unwrap();

        let just_before = authority("secret")
            .with_clock(FixedClock(issued + SESSION_TTL - Duration::from_secs(1)));
        assert!(just_before.verify(&token).is_ok());

        let at_expiry = authority("secret").with_clock(FixedClock(issued + SESSION_TTL));
        assert_eq!(at_expiry.verify(&token), Err(AuthError::ExpiredCredential));
    }

    #[test]
    fn test_bad_signature() {
        let token = authority("secret-A").issue(5, "mallory").unwrap();
        assert_eq!(
            authority("secret-B").verify(&token),
            Err(AuthError::InvalidCredential)
        );
    }

    #[test]
    fn test_expired_token_under_wrong_key_is_invalid_not_expired() {
        let issued = SystemTime::now() - Duration::from_secs(3 * 60 * 60);
        let token = authority("secret-A")
            .with_clock(FixedClock(issued))
            .issue(5, "mallory")
            .unwrap();
        assert_eq!(
            authority("secret-B").verify(&token),
            Err(AuthError::InvalidCredential)
        );
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = TokenAuthority::new(&SecurityConfig::new(Vec::new())).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn test_whitespace_key_is_rejected() {
        for key in ["   ", "\t\n", " \r\n "] {
            let err = TokenAuthority::new(&SecurityConfig::new(key.as_bytes())).unwrap_err();
            assert!(matches!(err, AppError::Config { .. }), "{key:?}");
        }
    }

    #[test]
    fn test_resolve_from_carrier() {
        let tokens = authority("secret");
        let token = tokens.issue(9, "grace").unwrap();

        assert_eq!(
            tokens.resolve_from_carrier(Some(format!("Bearer {token}").as_str())),
            Ok(9)
        );
        assert_eq!(
            tokens.resolve_from_carrier(Some(token.as_str())),
            Err(AuthError::MalformedCredential)
        );
        assert_eq!(
            tokens.resolve_from_carrier(Some("")),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            tokens.resolve_from_carrier(None),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            tokens.resolve_from_carrier(Some("Bearer ")),
            Err(AuthError::InvalidCredential)
        );
    }
}
