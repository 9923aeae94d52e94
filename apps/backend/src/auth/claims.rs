//! Claims embedded in backend-issued session tokens.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Payload of a session token.
///
/// `subject_name` is a snapshot taken at login and is not refreshed until the
/// user logs in again.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Account id
    #[serde(rename = "userid")]
    pub subject_id: i64,
    /// Display name at issuance
    #[serde(rename = "username")]
    pub subject_name: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch); the token is unusable at or after it
    pub exp: i64,
}

impl SessionClaims {
    pub fn expires_at(&self) -> SystemTime {
        from_unix_seconds(self.exp)
    }

    pub fn issued_at(&self) -> SystemTime {
        from_unix_seconds(self.iat)
    }
}

/// Seconds since the epoch; instants before it come out negative.
pub(crate) fn unix_seconds(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

fn from_unix_seconds(secs: i64) -> SystemTime {
    if secs >= 0 {
        UNIX_EPOCH + Duration::from_secs(secs as u64)
    } else {
        UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
    }
}
