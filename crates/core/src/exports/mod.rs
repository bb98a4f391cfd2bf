//! Exports module - CSV snapshots of every table.

mod csv_writer;
mod export_model;
mod export_service;

pub use csv_writer::{append_row, export_timestamp, ExportRow, ExportWriter};
pub use export_model::ExportSummary;
pub use export_service::{ExportService, ExportServiceTrait};
