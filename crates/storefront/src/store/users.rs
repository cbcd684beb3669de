//! User account storage.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use bravenza_core::{Email, UserId};

use crate::models::User;

use super::StoreError;

/// Account records keyed by sequential id with a unique-email constraint.
///
/// Email uniqueness is a case-sensitive exact match; the duplicate check
/// and insert happen under one write guard.
pub struct UserStore {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI32,
}

impl UserStore {
    /// Create an empty user store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Create a new user record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email is already registered.
    pub fn create(
        &self,
        email: Email,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        if users.values().any(|u| u.email == email) {
            return Err(StoreError::Conflict("User already exists".to_owned()));
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let user = User {
            id,
            email,
            password_hash,
            first_name,
            last_name,
            created_at: Utc::now(),
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    /// Look up a user by id.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Look up a user by exact email match.
    #[must_use]
    pub fn get_by_email(&self, email: &Email) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .find(|u| &u.email == email)
            .cloned()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
