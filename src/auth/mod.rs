//! User accounts and credential verification
//!
//! In-memory user store keyed by lowercase email. Passwords are stored only
//! in hashed form; see [`password::PasswordHasher`]. The store is shared
//! mutable state behind an `RwLock` (signup writes, login reads).

mod password;

pub use password::PasswordHasher;

use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Credential and account errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User already exists")]
    UserExists,
    #[error("stored password hash is malformed")]
    MalformedHash,
}

/// Stored account record; the password never appears in plaintext
#[derive(Debug, Clone)]
struct UserRecord {
    password_hash: String,
    name: String,
}

/// Public identity handed back to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

/// In-memory account store
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, UserRecord>>,
    hasher: PasswordHasher,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the stock demo account
    pub fn with_demo_user() -> Self {
        let store = Self::new();
        store
            .signup("test@example.com", "password123", "Test User")
            .expect("empty store accepts the demo user");
        store
    }

    /// Register a new account; fails without side effects when the email is
    /// already taken
    pub fn signup(&self, email: &str, password: &str, name: &str) -> Result<UserProfile, AuthError> {
        let email = email.to_lowercase();
        let mut users = self.users.write().expect("user store lock poisoned");
        if users.contains_key(&email) {
            return Err(AuthError::UserExists);
        }

        users.insert(
            email.clone(),
            UserRecord {
                password_hash: self.hasher.hash(password),
                name: name.to_string(),
            },
        );

        Ok(UserProfile {
            email,
            name: name.to_string(),
        })
    }

    /// Verify credentials, returning the profile on success
    pub fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let email = email.to_lowercase();
        let users = self.users.read().expect("user store lock poisoned");
        let record = users.get(&email).ok_or(AuthError::InvalidCredentials)?;

        if self.hasher.verify(password, &record.password_hash)? {
            Ok(UserProfile {
                email,
                name: record.name.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Look up a profile by email
    pub fn get(&self, email: &str) -> Option<UserProfile> {
        let users = self.users.read().expect("user store lock poisoned");
        users.get(email).map(|record| UserProfile {
            email: email.to_string(),
            name: record.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_then_login() {
        let store = UserStore::new();
        let profile = store.signup("Alice@Example.com", "hunter22", "Alice").unwrap();
        assert_eq!(profile.email, "alice@example.com");

        let logged_in = store.login("alice@example.com", "hunter22").unwrap();
        assert_eq!(logged_in, profile);
    }

    #[test]
    fn test_login_wrong_password() {
        let store = UserStore::new();
        store.signup("a@b.com", "secret", "A").unwrap();
        assert_eq!(
            store.login("a@b.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_unknown_email() {
        let store = UserStore::new();
        assert_eq!(
            store.login("nobody@b.com", "pw"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_duplicate_signup_leaves_record_untouched() {
        let store = UserStore::new();
        store.signup("a@b.com", "original", "First").unwrap();

        assert_eq!(
            store.signup("a@b.com", "other", "Second"),
            Err(AuthError::UserExists)
        );

        // The original credentials and name still stand
        let profile = store.login("a@b.com", "original").unwrap();
        assert_eq!(profile.name, "First");
        assert_eq!(
            store.login("a@b.com", "other"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_demo_user_seeded() {
        let store = UserStore::with_demo_user();
        let profile = store.login("test@example.com", "password123").unwrap();
        assert_eq!(profile.name, "Test User");
    }
}
