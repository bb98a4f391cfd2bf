//! Medical records module - domain models, services, and traits.

mod records_model;
mod records_service;
mod records_traits;

pub use records_model::{MedicalRecord, MedicalRecordInput, NewMedicalRecord};
pub use records_service::MedicalRecordService;
pub use records_traits::{MedicalRecordRepositoryTrait, MedicalRecordServiceTrait};
