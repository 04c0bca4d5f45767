//! Password hashing and verification
//!
//! PBKDF2-HMAC-SHA256 with a random per-password salt. Encoded form:
//! `$pbkdf2-sha256$<iterations>$<salt-b64>$<hash-b64>`.

use super::AuthError;
use base64::{engine::general_purpose::STANDARD_NO_PAD as B64, Engine as _};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;
const DEFAULT_ITERATIONS: u32 = 10_000;

/// Password hasher with a configurable work factor
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let derived = derive_key(password.as_bytes(), &salt, self.iterations);
        format!(
            "$pbkdf2-sha256${}${}${}",
            self.iterations,
            B64.encode(salt),
            B64.encode(derived)
        )
    }

    /// Verify a password against an encoded hash
    pub fn verify(&self, password: &str, encoded: &str) -> Result<bool, AuthError> {
        let parts: Vec<&str> = encoded.split('$').collect();
        if parts.len() != 5 || !parts[0].is_empty() || parts[1] != "pbkdf2-sha256" {
            return Err(AuthError::MalformedHash);
        }

        let iterations: u32 = parts[2].parse().map_err(|_| AuthError::MalformedHash)?;
        let salt = B64.decode(parts[3]).map_err(|_| AuthError::MalformedHash)?;
        let expected = B64.decode(parts[4]).map_err(|_| AuthError::MalformedHash)?;

        let derived = derive_key(password.as_bytes(), &salt, iterations);
        Ok(constant_time_eq(&derived, &expected))
    }
}

/// PBKDF2 key derivation, single HASH_LEN block
fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> [u8; HASH_LEN] {
    let mut block = [0u8; HASH_LEN];

    // U1 = HMAC(password, salt || INT(1))
    let mut mac = HmacSha256::new_from_slice(password).expect("hmac accepts any key length");
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());
    let mut u: [u8; HASH_LEN] = mac.finalize().into_bytes().into();
    block.copy_from_slice(&u);

    for _ in 1..iterations {
        let mut mac = HmacSha256::new_from_slice(password).expect("hmac accepts any key length");
        mac.update(&u);
        u = mac.finalize().into_bytes().into();
        for (b, x) in block.iter_mut().zip(u.iter()) {
            *b ^= x;
        }
    }

    block
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lower work factor keeps the test suite fast
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(100)
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let hasher = hasher();
        let encoded = hasher.hash("password123");
        assert!(encoded.starts_with("$pbkdf2-sha256$100$"));
        assert!(hasher.verify("password123", &encoded).unwrap());
        assert!(!hasher.verify("password124", &encoded).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = hasher();
        assert_ne!(hasher.hash("same"), hasher.hash("same"));
    }

    #[test]
    fn test_malformed_hash_rejected() {
        let hasher = hasher();
        assert!(matches!(
            hasher.verify("pw", "not-a-hash"),
            Err(AuthError::MalformedHash)
        ));
        assert!(matches!(
            hasher.verify("pw", "$pbkdf2-sha256$abc$xx$yy"),
            Err(AuthError::MalformedHash)
        ));
    }

    #[test]
    fn test_iterations_read_from_hash() {
        // Verification honors the work factor stored in the hash, not the
        // verifier's own
        let encoded = PasswordHasher::new(50).hash("pw");
        assert!(PasswordHasher::new(100).verify("pw", &encoded).unwrap());
    }
}
