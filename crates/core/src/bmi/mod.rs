//! BMI module - classification rule, measurements, services, and traits.

mod bmi_calculator;
mod bmi_model;
mod bmi_service;
mod bmi_traits;

pub use bmi_calculator::{assess, compute_bmi};
pub use bmi_model::{BmiCategory, BmiInput, BmiReading, BmiRecord, NewBmiRecord};
pub use bmi_service::BmiService;
pub use bmi_traits::{BmiRepositoryTrait, BmiServiceTrait};
