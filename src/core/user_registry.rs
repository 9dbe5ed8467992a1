//! User registration and login
//!
//! The `UserRegistry` keeps registered users keyed by username and hands out
//! user identifiers from its own counter.

use crate::types::{LedgerError, User, UserId};
use std::collections::HashMap;

/// Registered users keyed by username
pub struct UserRegistry {
    /// Map of username to user record
    users: HashMap<String, User>,

    /// Identifier handed to the next registration
    next_id: UserId,
}

impl UserRegistry {
    /// Create an empty registry whose first user gets id 1
    pub fn new() -> Self {
        UserRegistry {
            users: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register a new user
    ///
    /// Usernames are unique and case-sensitive. A rejected registration does
    /// not consume an identifier.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUsername` if the username is already registered.
    pub fn register(&mut self, username: &str, password: &str) -> Result<User, LedgerError> {
        if self.users.contains_key(username) {
            return Err(LedgerError::duplicate_username(username));
        }

        let user = User::new(self.next_id, username, password);
        self.next_id += 1;
        self.users.insert(user.username.clone(), user.clone());

        Ok(user)
    }

    /// Check credentials and return the matching user
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` when the username is unknown or the
    /// password differs.
    pub fn login(&self, username: &str, password: &str) -> Result<User, LedgerError> {
        self.users
            .get(username)
            .filter(|user| user.password_matches(password))
            .cloned()
            .ok_or(LedgerError::InvalidCredentials)
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether nobody has registered yet
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
