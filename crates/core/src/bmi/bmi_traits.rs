use crate::bmi::bmi_model::{BmiInput, BmiRecord, NewBmiRecord};
use crate::errors::Result;
use crate::users::UserFilter;
use async_trait::async_trait;

/// Trait for BMI repository operations
#[async_trait]
pub trait BmiRepositoryTrait: Send + Sync {
    async fn create(&self, new_record: NewBmiRecord) -> Result<BmiRecord>;
    /// Most recent first.
    fn list_all(&self, filter: UserFilter) -> Result<Vec<BmiRecord>>;

    fn list_by_user(&self, user_id: i32) -> Result<Vec<BmiRecord>> {
        self.list_all(UserFilter::User(user_id))
    }
}

/// Trait for BMI service operations
#[async_trait]
pub trait BmiServiceTrait: Send + Sync {
    /// Computes, classifies and stores a measurement for the user.
    async fn record_bmi(&self, user_id: i32, input: BmiInput) -> Result<BmiRecord>;
    fn get_history(&self, user_id: i32) -> Result<Vec<BmiRecord>>;
    fn list_records(&self, filter: UserFilter) -> Result<Vec<BmiRecord>>;
}
