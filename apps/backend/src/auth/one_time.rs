//! Single-use tokens for e-mail verification and password reset links.

use std::fmt::Write;

use rand::TryRngCore;

use crate::error::AppError;

const TOKEN_BYTES: usize = 16;

/// 16 bytes from the OS RNG rendered as 32 lowercase hex characters.
pub fn generate_verification_token() -> Result<String, AppError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AppError::internal(format!("OS RNG unavailable: {e}")))?;

    let mut out = String::with_capacity(TOKEN_BYTES * 2);
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_32_lowercase_hex_chars() {
        let token = generate_verification_token().unwrap();
        assert_eq!(token.len(), 32);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn tokens_do_not_repeat() {
        let a = generate_verification_token().unwrap();
        let b = generate_verification_token().unwrap();
        assert_ne!(a, b);
    }
}
