use crate::errors::Result;
use crate::records::records_model::{MedicalRecord, MedicalRecordInput, NewMedicalRecord};
use crate::users::UserFilter;
use async_trait::async_trait;

/// Trait for medical record repository operations
#[async_trait]
pub trait MedicalRecordRepositoryTrait: Send + Sync {
    async fn create(&self, new_record: NewMedicalRecord) -> Result<MedicalRecord>;
    /// Ordered by record date, newest first.
    fn list_all(&self, filter: UserFilter) -> Result<Vec<MedicalRecord>>;

    fn list_by_user(&self, user_id: i32) -> Result<Vec<MedicalRecord>> {
        self.list_all(UserFilter::User(user_id))
    }
}

/// Trait for medical record service operations
#[async_trait]
pub trait MedicalRecordServiceTrait: Send + Sync {
    async fn add_record(&self, user_id: i32, input: MedicalRecordInput) -> Result<MedicalRecord>;
    fn get_records(&self, user_id: i32) -> Result<Vec<MedicalRecord>>;
    fn list_records(&self, filter: UserFilter) -> Result<Vec<MedicalRecord>>;
}
