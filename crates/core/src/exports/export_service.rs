use chrono::{NaiveDateTime, Utc};
use log::info;
use std::path::Path;
use std::sync::Arc;

use super::csv_writer::{export_timestamp, ExportRow, ExportWriter};
use super::export_model::ExportSummary;
use crate::bmi::BmiRepositoryTrait;
use crate::diet_plans::DietPlanRepositoryTrait;
use crate::errors::{Error, Result};
use crate::records::MedicalRecordRepositoryTrait;
use crate::users::{UserFilter, UserRepositoryTrait};

/// Trait for full-table export operations
pub trait ExportServiceTrait: Send + Sync {
    /// Dumps all four tables into timestamped files sharing one timestamp.
    fn export_all(&self) -> Result<ExportSummary>;
}

/// Snapshots every table to CSV
pub struct ExportService {
    writer: Arc<ExportWriter>,
    users: Arc<dyn UserRepositoryTrait>,
    bmi_records: Arc<dyn BmiRepositoryTrait>,
    diet_plans: Arc<dyn DietPlanRepositoryTrait>,
    medical_records: Arc<dyn MedicalRecordRepositoryTrait>,
}

impl ExportService {
    pub fn new(
        writer: Arc<ExportWriter>,
        users: Arc<dyn UserRepositoryTrait>,
        bmi_records: Arc<dyn BmiRepositoryTrait>,
        diet_plans: Arc<dyn DietPlanRepositoryTrait>,
        medical_records: Arc<dyn MedicalRecordRepositoryTrait>,
    ) -> Self {
        Self {
            writer,
            users,
            bmi_records,
            diet_plans,
            medical_records,
        }
    }

    /// Same as [`ExportServiceTrait::export_all`] with a caller-chosen timestamp.
    pub fn export_all_at(&self, at: NaiveDateTime) -> Result<ExportSummary> {
        let stamp = export_timestamp(at);

        // Snapshots list rows in insertion order.
        let mut users = self.users.list_all()?;
        users.sort_by_key(|u| u.id);
        let mut bmi_records = self.bmi_records.list_all(UserFilter::All)?;
        bmi_records.sort_by_key(|r| r.id);
        let mut diet_plans = self.diet_plans.list_all(UserFilter::All)?;
        diet_plans.sort_by_key(|p| p.id);
        let mut medical_records = self.medical_records.list_all(UserFilter::All)?;
        medical_records.sort_by_key(|r| r.id);

        let summary = ExportSummary {
            users: self.dump(&users, &stamp)?,
            bmi_records: self.dump(&bmi_records, &stamp)?,
            diet_plans: self.dump(&diet_plans, &stamp)?,
            medical_records: self.dump(&medical_records, &stamp)?,
        };
        info!(
            "Exported all tables to {} ({})",
            self.writer.export_dir().display(),
            stamp
        );
        Ok(summary)
    }

    fn dump<R: ExportRow>(&self, rows: &[R], stamp: &str) -> Result<String> {
        let path = self.writer.dump(rows, stamp)?;
        file_name(&path)
    }
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::Unexpected(format!("Invalid export path {}", path.display())))
}

impl ExportServiceTrait for ExportService {
    fn export_all(&self) -> Result<ExportSummary> {
        self.export_all_at(Utc::now().naive_utc())
    }
}
