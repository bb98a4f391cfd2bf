//! SQLite storage implementation for medical records.

mod model;
mod repository;

pub use model::{MedicalRecordDB, NewMedicalRecordDB};
pub use repository::MedicalRecordRepository;
