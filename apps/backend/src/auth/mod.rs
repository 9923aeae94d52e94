//! Stateless session tokens: issuance, verification and carrier parsing.

pub mod bearer;
pub mod claims;
pub mod clock;
pub mod jwt;
pub mod one_time;

pub use bearer::parse_bearer;
pub use claims::SessionClaims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use jwt::{TokenAuthority, SESSION_TTL};
pub use one_time::generate_verification_token;
