use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::records_model::{MedicalRecord, MedicalRecordInput, NewMedicalRecord};
use super::records_traits::{MedicalRecordRepositoryTrait, MedicalRecordServiceTrait};
use crate::constants::RECORD_DATE_FORMAT;
use crate::errors::{Error, Result};
use crate::exports::{append_row, ExportWriter};
use crate::users::UserFilter;

/// Service for the medical record journal
pub struct MedicalRecordService {
    repository: Arc<dyn MedicalRecordRepositoryTrait>,
    export_writer: Option<Arc<ExportWriter>>,
}

impl MedicalRecordService {
    pub fn new(repository: Arc<dyn MedicalRecordRepositoryTrait>) -> Self {
        Self {
            repository,
            export_writer: None,
        }
    }

    /// Appends every stored record to the standing CSV export.
    pub fn with_export_writer(mut self, export_writer: Arc<ExportWriter>) -> Self {
        self.export_writer = Some(export_writer);
        self
    }

    fn validate(user_id: i32, input: MedicalRecordInput) -> Result<NewMedicalRecord> {
        let date = input.date.trim();
        if date.is_empty() {
            return Err(Error::missing_field("date"));
        }
        let date = NaiveDate::parse_from_str(date, RECORD_DATE_FORMAT)?;

        let blood_pressure = input.blood_pressure.trim();
        if blood_pressure.is_empty() {
            return Err(Error::missing_field("bloodPressure"));
        }
        if !input.blood_sugar.is_finite() {
            return Err(Error::invalid_input("Blood sugar must be a number"));
        }

        Ok(NewMedicalRecord {
            user_id,
            date,
            blood_pressure: blood_pressure.to_string(),
            blood_sugar: input.blood_sugar,
            notes: input.notes.unwrap_or_default(),
        })
    }
}

#[async_trait::async_trait]
impl MedicalRecordServiceTrait for MedicalRecordService {
    async fn add_record(&self, user_id: i32, input: MedicalRecordInput) -> Result<MedicalRecord> {
        let new_record = Self::validate(user_id, input)?;
        let record = self.repository.create(new_record).await?;
        debug!("Stored medical record {} for user {}", record.id, user_id);

        append_row(self.export_writer.as_ref(), &record).await?;
        Ok(record)
    }

    fn get_records(&self, user_id: i32) -> Result<Vec<MedicalRecord>> {
        self.repository.list_by_user(user_id)
    }

    fn list_records(&self, filter: UserFilter) -> Result<Vec<MedicalRecord>> {
        self.repository.list_all(filter)
    }
}
