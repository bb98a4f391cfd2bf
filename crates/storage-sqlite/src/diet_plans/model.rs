//! Database models for diet plans. The plan document is stored as JSON text.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use diet_consultant_core::diet_plans::{DietPlan, NewDietPlan};

use crate::errors::StorageError;

/// Database model for diet plans
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::diet_plans)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DietPlanDB {
    pub id: i32,
    pub user_id: i32,
    pub bmi: f64,
    pub plan: String,
    pub created_at: NaiveDateTime,
}

/// Database model for storing a new diet plan
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::diet_plans)]
pub struct NewDietPlanDB {
    pub user_id: i32,
    pub bmi: f64,
    pub plan: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<DietPlanDB> for DietPlan {
    type Error = StorageError;

    fn try_from(db: DietPlanDB) -> Result<Self, StorageError> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            bmi: db.bmi,
            plan: serde_json::from_str(&db.plan)?,
            created_at: db.created_at,
        })
    }
}

impl NewDietPlanDB {
    pub fn from_domain(domain: NewDietPlan, created_at: NaiveDateTime) -> Result<Self, StorageError> {
        Ok(Self {
            user_id: domain.user_id,
            bmi: domain.bmi,
            plan: serde_json::to_string(&domain.plan)?,
            created_at,
        })
    }
}
