use log::debug;
use std::sync::Arc;

use super::diet_plans_model::{DietPlan, NewDietPlan};
use super::diet_plans_traits::{DietPlanRepositoryTrait, DietPlanServiceTrait};
use super::plan_catalog::plan_for_bmi;
use crate::errors::{Error, Result};
use crate::exports::{append_row, ExportWriter};
use crate::users::UserFilter;

/// Service for catalog-backed diet plans
///
/// Plans are memoized per `(user_id, bmi)`: a second request with the same
/// BMI value returns the stored plan instead of inserting a new one.
pub struct DietPlanService {
    repository: Arc<dyn DietPlanRepositoryTrait>,
    export_writer: Option<Arc<ExportWriter>>,
}

impl DietPlanService {
    pub fn new(repository: Arc<dyn DietPlanRepositoryTrait>) -> Self {
        Self {
            repository,
            export_writer: None,
        }
    }

    /// Appends every generated plan to the standing CSV export.
    pub fn with_export_writer(mut self, export_writer: Arc<ExportWriter>) -> Self {
        self.export_writer = Some(export_writer);
        self
    }

    async fn generate(&self, user_id: i32, bmi: f64) -> Result<DietPlan> {
        let plan = self
            .repository
            .create(NewDietPlan {
                user_id,
                bmi,
                plan: plan_for_bmi(bmi),
            })
            .await?;
        debug!("Generated diet plan {} for user {} (bmi {})", plan.id, user_id, bmi);

        append_row(self.export_writer.as_ref(), &plan).await?;
        Ok(plan)
    }
}

fn validate_bmi(bmi: f64) -> Result<()> {
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err(Error::invalid_input("BMI must be a positive number"));
    }
    Ok(())
}

#[async_trait::async_trait]
impl DietPlanServiceTrait for DietPlanService {
    async fn get_or_generate(&self, user_id: i32, bmi: f64) -> Result<DietPlan> {
        validate_bmi(bmi)?;
        if let Some(existing) = self.repository.find_latest(user_id, bmi)? {
            return Ok(existing);
        }
        self.generate(user_id, bmi).await
    }

    async fn regenerate(&self, user_id: i32, bmi: f64) -> Result<DietPlan> {
        validate_bmi(bmi)?;
        self.generate(user_id, bmi).await
    }

    fn list_plans(&self, filter: UserFilter) -> Result<Vec<DietPlan>> {
        self.repository.list_all(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;
    use crate::diet_plans::plan_for;
    use chrono::{Duration, NaiveDate};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockDietPlanRepository {
        plans: Arc<Mutex<Vec<DietPlan>>>,
    }

    #[async_trait::async_trait]
    impl DietPlanRepositoryTrait for MockDietPlanRepository {
        async fn create(&self, new_plan: NewDietPlan) -> Result<DietPlan> {
            let mut plans = self.plans.lock().unwrap();
            let base = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let plan = DietPlan {
                id: plans.len() as i32 + 1,
                user_id: new_plan.user_id,
                bmi: new_plan.bmi,
                plan: new_plan.plan,
                created_at: base + Duration::seconds(plans.len() as i64),
            };
            plans.push(plan.clone());
            Ok(plan)
        }

        fn find_latest(&self, user_id: i32, bmi: f64) -> Result<Option<DietPlan>> {
            Ok(self
                .plans
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|p| p.user_id == user_id && p.bmi == bmi)
                .cloned())
        }

        fn list_all(&self, filter: UserFilter) -> Result<Vec<DietPlan>> {
            let mut plans: Vec<DietPlan> = self
                .plans
                .lock()
                .unwrap()
                .iter()
                .filter(|p| filter.user_id().map_or(true, |id| p.user_id == id))
                .cloned()
                .collect();
            plans.reverse();
            Ok(plans)
        }
    }

    fn service() -> (Arc<MockDietPlanRepository>, DietPlanService) {
        let repo = Arc::new(MockDietPlanRepository::default());
        (repo.clone(), DietPlanService::new(repo))
    }

    #[tokio::test]
    async fn test_get_or_generate_memoizes_per_user_and_bmi() {
        let (repo, service) = service();

        let first = service.get_or_generate(1, 22.5).await.unwrap();
        let second = service.get_or_generate(1, 22.5).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(repo.plans.lock().unwrap().len(), 1);

        let other_user = service.get_or_generate(2, 22.5).await.unwrap();
        assert_ne!(other_user.id, first.id);
        assert_eq!(first.plan, plan_for(BmiCategory::NormalWeight));
    }

    #[tokio::test]
    async fn test_nearby_bmi_is_a_different_key() {
        let (repo, service) = service();
        service.get_or_generate(1, 24.9).await.unwrap();
        service.get_or_generate(1, 24.90001).await.unwrap();
        assert_eq!(repo.plans.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_regenerate_always_inserts() {
        let (repo, service) = service();
        let first = service.get_or_generate(1, 31.0).await.unwrap();
        let regenerated = service.regenerate(1, 31.0).await.unwrap();

        assert_ne!(first.id, regenerated.id);
        assert_eq!(regenerated.plan, plan_for(BmiCategory::Obese));
        assert_eq!(repo.plans.lock().unwrap().len(), 2);

        let latest = service.get_or_generate(1, 31.0).await.unwrap();
        assert_eq!(latest.id, regenerated.id);
    }

    #[tokio::test]
    async fn test_invalid_bmi_is_rejected() {
        let (repo, service) = service();
        for bmi in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(service.get_or_generate(1, bmi).await.is_err());
            assert!(service.regenerate(1, bmi).await.is_err());
        }
        assert!(repo.plans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_plans_respects_filter() {
        let (_repo, service) = service();
        service.get_or_generate(1, 17.0).await.unwrap();
        service.get_or_generate(2, 27.0).await.unwrap();

        let only_two = service.list_plans(UserFilter::User(2)).unwrap();
        assert_eq!(only_two.len(), 1);
        assert_eq!(only_two[0].plan, plan_for(BmiCategory::Overweight));
        assert_eq!(service.list_plans(UserFilter::All).unwrap().len(), 2);
    }
}
