//! One-shot full CSV export of every table.

use std::sync::Arc;

use diet_consultant_core::exports::{ExportServiceTrait, ExportWriter};
use diet_consultant_server::{build_export_service, config::Config, init_tracing, open_database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    let database = open_database(&config)?;
    let writer = Arc::new(ExportWriter::new(&config.export_dir));
    let export_service = build_export_service(&database, writer.clone());

    let files = tokio::task::spawn_blocking(move || export_service.export_all()).await??;

    let dir = writer.export_dir();
    for name in [
        &files.users,
        &files.bmi_records,
        &files.diet_plans,
        &files.medical_records,
    ] {
        println!("{}", dir.join(name).display());
    }
    Ok(())
}
