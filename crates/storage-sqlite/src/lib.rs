//! SQLite storage implementation for Diet Consultant.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `diet-consultant-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! Reads go through the r2d2 pool; every write is funnelled through the
//! single writer actor so SQLite sees one writer at a time.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod bmi;
pub mod diet_plans;
pub mod medical_records;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, Database, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use bmi::BmiRepository;
pub use diet_plans::DietPlanRepository;
pub use medical_records::MedicalRecordRepository;
pub use users::UserRepository;

// Re-export from diet-consultant-core for convenience
pub use diet_consultant_core::errors::{DatabaseError, Error, Result};
