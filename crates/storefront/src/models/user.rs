//! User domain types.
//!
//! The domain type carries the Argon2 password hash and is therefore not
//! serializable; API responses go through [`UserResponse`], which never
//! includes the hash.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bravenza_core::{Email, UserId};

/// A registered storefront user (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address, unique across all users (exact match).
    pub email: Email,
    /// Argon2id password hash. Never serialized.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// The wire shape of a user: everything except the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        }
    }
}
