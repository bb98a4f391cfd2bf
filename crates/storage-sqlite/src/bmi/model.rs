//! Database models for BMI measurements.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use diet_consultant_core::bmi::{BmiRecord, NewBmiRecord};
use diet_consultant_core::Result;

/// Database model for BMI measurements
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::bmi_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BmiRecordDB {
    pub id: i32,
    pub user_id: i32,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: String,
    pub timestamp: NaiveDateTime,
}

/// Database model for storing a new BMI measurement
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::bmi_records)]
pub struct NewBmiRecordDB {
    pub user_id: i32,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: String,
    pub timestamp: NaiveDateTime,
}

impl TryFrom<BmiRecordDB> for BmiRecord {
    type Error = diet_consultant_core::Error;

    fn try_from(db: BmiRecordDB) -> Result<Self> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            height: db.height,
            weight: db.weight,
            bmi: db.bmi,
            category: db.category.parse()?,
            timestamp: db.timestamp,
        })
    }
}

impl NewBmiRecordDB {
    pub fn from_domain(domain: NewBmiRecord, timestamp: NaiveDateTime) -> Self {
        Self {
            user_id: domain.user_id,
            height: domain.height,
            weight: domain.weight,
            bmi: domain.bmi,
            category: domain.category.label().to_string(),
            timestamp,
        }
    }
}
