//! Database models for medical records.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use diet_consultant_core::records::{MedicalRecord, NewMedicalRecord};

/// Database model for medical records
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::medical_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MedicalRecordDB {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub blood_pressure: String,
    pub blood_sugar: f64,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// Database model for storing a new medical record
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::medical_records)]
pub struct NewMedicalRecordDB {
    pub user_id: i32,
    pub date: NaiveDate,
    pub blood_pressure: String,
    pub blood_sugar: f64,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

impl From<MedicalRecordDB> for MedicalRecord {
    fn from(db: MedicalRecordDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            date: db.date,
            blood_pressure: db.blood_pressure,
            blood_sugar: db.blood_sugar,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl NewMedicalRecordDB {
    pub fn from_domain(domain: NewMedicalRecord, created_at: NaiveDateTime) -> Self {
        Self {
            user_id: domain.user_id,
            date: domain.date,
            blood_pressure: domain.blood_pressure,
            blood_sugar: domain.blood_sugar,
            notes: domain.notes,
            created_at,
        }
    }
}
