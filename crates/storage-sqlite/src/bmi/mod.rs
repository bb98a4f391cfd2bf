//! SQLite storage implementation for BMI measurements.

mod model;
mod repository;

pub use model::{BmiRecordDB, NewBmiRecordDB};
pub use repository::BmiRepository;
