//! SQLite storage implementation for diet plans.

mod model;
mod repository;

pub use model::{DietPlanDB, NewDietPlanDB};
pub use repository::DietPlanRepository;
