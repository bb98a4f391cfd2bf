//! Diet plans module - plan catalog, stored plans, services, and traits.

mod diet_plans_model;
mod diet_plans_service;
mod diet_plans_traits;
mod plan_catalog;

pub use diet_plans_model::{DietPlan, DietPlanDocument, NewDietPlan};
pub use diet_plans_service::DietPlanService;
pub use diet_plans_traits::{DietPlanRepositoryTrait, DietPlanServiceTrait};
pub use plan_catalog::{plan_for, plan_for_bmi, template_for, PlanTemplate};
