//! Cookie-backed session store
//!
//! Maps opaque UUID tokens to logged-in emails. One token per login; logout
//! revokes the token. Tokens live only in memory.

use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "pricepeek_session";

/// In-memory token -> email session store
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for an email, returning the new token
    pub fn create(&self, email: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), email.to_string());
        token
    }

    /// Resolve a token to its email, if the session is still active
    pub fn get(&self, token: &str) -> Option<String> {
        self.sessions
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .cloned()
    }

    /// Revoke a token; unknown tokens are a no-op
    pub fn revoke(&self, token: &str) {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = SessionStore::new();
        let token = store.create("a@b.com");
        assert_eq!(store.get(&token).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new();
        assert_ne!(store.create("a@b.com"), store.create("a@b.com"));
    }

    #[test]
    fn test_revoke() {
        let store = SessionStore::new();
        let token = store.create("a@b.com");
        store.revoke(&token);
        assert!(store.get(&token).is_none());

        // Revoking again is harmless
        store.revoke(&token);
    }

    #[test]
    fn test_unknown_token() {
        let store = SessionStore::new();
        assert!(store.get("no-such-token").is_none());
    }
}
