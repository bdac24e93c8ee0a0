//! User entity.

use crate::{UserId, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity. Email and phone are unique; the password hash is never
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Display name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    /// Unique email address.
    #[validate(email)]
    pub email: String,

    /// Hashed password (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Unique phone number.
    #[validate(length(min = 7, max = 20))]
    pub phone: String,

    /// Role of the user.
    pub role: UserRole,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new regular user.
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            phone,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the user is an admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
