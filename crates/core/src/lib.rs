//! Diet Consultant Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the Diet Consultant backend:
//! the BMI classification rule, the diet plan catalog, medical records and CSV
//! exports. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod bmi;
pub mod constants;
pub mod diet_plans;
pub mod errors;
pub mod exports;
pub mod records;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

pub use users::UserFilter;
