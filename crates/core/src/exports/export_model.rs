//! Export column layouts for each entity and the full-export summary.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::bmi::BmiRecord;
use crate::diet_plans::DietPlan;
use crate::errors::Result;
use crate::records::MedicalRecord;
use crate::users::User;

use super::csv_writer::ExportRow;

fn iso(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

impl ExportRow for User {
    const STEM: &'static str = "users";
    const HEADERS: &'static [&'static str] = &["id", "name", "email", "created_at"];

    fn fields(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            iso(&self.created_at),
        ])
    }
}

impl ExportRow for BmiRecord {
    const STEM: &'static str = "bmi_records";
    const HEADERS: &'static [&'static str] = &[
        "id",
        "user_id",
        "height",
        "weight",
        "bmi",
        "category",
        "timestamp",
    ];

    fn fields(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.height.to_string(),
            self.weight.to_string(),
            self.bmi.to_string(),
            self.category.label().to_string(),
            iso(&self.timestamp),
        ])
    }
}

impl ExportRow for DietPlan {
    const STEM: &'static str = "diet_plans";
    const HEADERS: &'static [&'static str] = &["id", "user_id", "bmi", "plan", "created_at"];

    fn fields(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.bmi.to_string(),
            serde_json::to_string(&self.plan)?,
            iso(&self.created_at),
        ])
    }
}

impl ExportRow for MedicalRecord {
    const STEM: &'static str = "medical_records";
    const HEADERS: &'static [&'static str] = &[
        "id",
        "user_id",
        "date",
        "bp",
        "sugar",
        "notes",
        "created_at",
    ];

    fn fields(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.date.to_string(),
            self.blood_pressure.clone(),
            self.blood_sugar.to_string(),
            self.notes.clone(),
            iso(&self.created_at),
        ])
    }
}

/// File names written by a full export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub users: String,
    pub bmi_records: String,
    pub diet_plans: String,
    pub medical_records: String,
}
