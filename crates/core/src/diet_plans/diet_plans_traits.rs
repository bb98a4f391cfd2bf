use crate::diet_plans::diet_plans_model::{DietPlan, NewDietPlan};
use crate::errors::Result;
use crate::users::UserFilter;
use async_trait::async_trait;

/// Trait for diet plan repository operations
#[async_trait]
pub trait DietPlanRepositoryTrait: Send + Sync {
    async fn create(&self, new_plan: NewDietPlan) -> Result<DietPlan>;
    /// Most recent plan stored for exactly this `(user_id, bmi)` pair.
    fn find_latest(&self, user_id: i32, bmi: f64) -> Result<Option<DietPlan>>;
    /// Most recent first.
    fn list_all(&self, filter: UserFilter) -> Result<Vec<DietPlan>>;

    fn list_by_user(&self, user_id: i32) -> Result<Vec<DietPlan>> {
        self.list_all(UserFilter::User(user_id))
    }
}

/// Trait for diet plan service operations
#[async_trait]
pub trait DietPlanServiceTrait: Send + Sync {
    /// Returns the stored plan for `(user_id, bmi)`, generating one if none exists.
    async fn get_or_generate(&self, user_id: i32, bmi: f64) -> Result<DietPlan>;
    /// Always generates and stores a new plan.
    async fn regenerate(&self, user_id: i32, bmi: f64) -> Result<DietPlan>;
    fn list_plans(&self, filter: UserFilter) -> Result<Vec<DietPlan>>;
}
