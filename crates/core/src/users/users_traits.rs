use crate::errors::Result;
use crate::users::users_model::{Credentials, NewUser, Signup, User};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: i32) -> Result<Option<User>>;
    fn list_all(&self) -> Result<Vec<User>>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a new user, rejecting emails that are already taken.
    async fn signup(&self, signup: Signup) -> Result<User>;
    /// Verifies credentials. Unknown email and wrong password fail identically.
    fn login(&self, credentials: Credentials) -> Result<User>;
    fn get_user(&self, user_id: i32) -> Result<Option<User>>;
    fn list_users(&self) -> Result<Vec<User>>;
}
