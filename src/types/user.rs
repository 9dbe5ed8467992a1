//! User-related types for the ledger
//!
//! Users are created on registration and never change afterwards.

/// User identifier
///
/// Assigned sequentially starting at 1, never reused.
pub type UserId = u32;

/// A registered user
///
/// The password is stored and compared as an opaque string. There is no
/// hashing; the ledger is not an authentication system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Sequential identifier assigned at registration
    pub id: UserId,

    /// Unique, case-sensitive login name
    pub username: String,

    /// Opaque password, compared for exact equality on login
    pub password: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        User {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a candidate password against the stored one
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
