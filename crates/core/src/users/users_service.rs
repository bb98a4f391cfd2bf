use log::{debug, warn};
use std::sync::Arc;

use super::password::{hash_password, verify_password};
use super::users_model::{Credentials, NewUser, Signup, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::constants::{EMAIL_ALREADY_REGISTERED, INVALID_CREDENTIALS};
use crate::errors::{DatabaseError, Error, Result};
use crate::exports::{append_row, ExportWriter};

/// Service for registration and credential checks
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    export_writer: Option<Arc<ExportWriter>>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self {
            repository,
            export_writer: None,
        }
    }

    /// Appends every new user to the standing CSV export.
    pub fn with_export_writer(mut self, export_writer: Arc<ExportWriter>) -> Self {
        self.export_writer = Some(export_writer);
        self
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::missing_field(field));
    }
    Ok(trimmed)
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn signup(&self, signup: Signup) -> Result<User> {
        let name = required(&signup.name, "name")?;
        let email = required(&signup.email, "email")?;
        if signup.password.is_empty() {
            return Err(Error::missing_field("password"));
        }

        if self.repository.find_by_email(email)?.is_some() {
            debug!("Signup rejected, email already registered");
            return Err(Error::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
        }

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(&signup.password)?,
        };

        // Two signups can race past the lookup above; the unique index decides.
        let user = match self.repository.create(new_user).await {
            Ok(user) => user,
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                return Err(Error::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
            }
            Err(e) => return Err(e),
        };
        debug!("Registered user {}", user.id);

        append_row(self.export_writer.as_ref(), &user).await?;
        Ok(user)
    }

    fn login(&self, credentials: Credentials) -> Result<User> {
        let email = required(&credentials.email, "email")?;
        if credentials.password.is_empty() {
            return Err(Error::missing_field("password"));
        }

        let Some(user) = self.repository.find_by_email(email)? else {
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !verify_password(&credentials.password, &user.password_hash)? {
            warn!("Failed login attempt for user {}", user.id);
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
        Ok(user)
    }

    fn get_user(&self, user_id: i32) -> Result<Option<User>> {
        self.repository.find_by_id(user_id)
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list_all()
    }
}
