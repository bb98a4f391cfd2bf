//! Users domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Domain model representing a registered user.
///
/// The password hash is never serialized.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Input model for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Signup payload after boundary validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login payload after boundary validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Scope for administrative listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    /// Every user's rows.
    #[default]
    All,
    /// Only rows owned by this user id.
    User(i32),
}

impl UserFilter {
    /// Parses an optional query value; absent means [`UserFilter::All`].
    pub fn from_query(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(UserFilter::All),
            Some(raw) => raw.parse(),
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            UserFilter::All => None,
            UserFilter::User(id) => Some(*id),
        }
    }
}

impl FromStr for UserFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(UserFilter::All);
        }
        trimmed
            .parse::<i32>()
            .map(UserFilter::User)
            .map_err(|_| Error::invalid_input(format!("Invalid user_id filter '{}'", trimmed)))
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::All => write!(f, "all"),
            UserFilter::User(id) => write!(f, "{}", id),
        }
    }
}
