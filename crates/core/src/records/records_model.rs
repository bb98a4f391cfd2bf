//! Medical record domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Stored medical record.
///
/// Wire names follow the web client: `bloodPressure` / `bloodSugar`, snake case
/// for the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalRecord {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    #[serde(rename = "bloodPressure")]
    pub blood_pressure: String,
    #[serde(rename = "bloodSugar")]
    pub blood_sugar: f64,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// Input model for inserting a medical record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicalRecord {
    pub user_id: i32,
    pub date: NaiveDate,
    pub blood_pressure: String,
    pub blood_sugar: f64,
    pub notes: String,
}

/// Medical record as submitted, before the date is parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordInput {
    pub date: String,
    pub blood_pressure: String,
    pub blood_sugar: f64,
    pub notes: Option<String>,
}
