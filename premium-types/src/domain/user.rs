//! User domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::UserError;

/// Store-assigned identifier for a User.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps an identity value handed out by the store.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identity value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A username that passed validation.
///
/// The only rule is that it is present and non-empty; uniqueness is the
/// store's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validates a raw, possibly absent, username taken from the request.
    pub fn validate(raw: Option<&str>) -> Result<Self, UserError> {
        match raw {
            Some(name) if !name.is_empty() => Ok(Self(name.to_string())),
            _ => Err(UserError::UsernameMissing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user. Only ever produced by a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    /// Identity assigned by the store
    pub id: UserId,
    /// Unique username
    pub username: Username,
}

impl User {
    /// Reconstructs a user from a stored row.
    pub fn from_parts(id: UserId, username: Username) -> Self {
        Self { id, username }
    }
}
