//! Diet plan domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The recommendation document returned to clients and stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlanDocument {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    pub snacks: Vec<String>,
    pub tips: Vec<String>,
}

/// Stored diet plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlan {
    pub id: i32,
    pub user_id: i32,
    pub bmi: f64,
    pub plan: DietPlanDocument,
    pub created_at: NaiveDateTime,
}

/// Input model for inserting a diet plan.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDietPlan {
    pub user_id: i32,
    pub bmi: f64,
    pub plan: DietPlanDocument,
}
