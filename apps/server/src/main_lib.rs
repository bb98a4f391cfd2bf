use std::sync::Arc;

use crate::{auth::AuthManager, config::Config};
use diet_consultant_core::{
    bmi::{BmiService, BmiServiceTrait},
    diet_plans::{DietPlanService, DietPlanServiceTrait},
    exports::{ExportService, ExportServiceTrait, ExportWriter},
    records::{MedicalRecordService, MedicalRecordServiceTrait},
    users::{UserService, UserServiceTrait},
};
use diet_consultant_storage_sqlite::{
    BmiRepository, Database, DietPlanRepository, MedicalRecordRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub bmi_service: Arc<dyn BmiServiceTrait>,
    pub diet_plan_service: Arc<dyn DietPlanServiceTrait>,
    pub record_service: Arc<dyn MedicalRecordServiceTrait>,
    pub export_service: Arc<dyn ExportServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("DC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens (and migrates) the SQLite database named by the config.
pub fn open_database(config: &Config) -> anyhow::Result<Database> {
    let database = Database::open(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);
    Ok(database)
}

/// Full-table CSV export over the given database.
pub fn build_export_service(database: &Database, export_writer: Arc<ExportWriter>) -> ExportService {
    let pool = database.pool.clone();
    let writer = database.writer.clone();
    ExportService::new(
        export_writer,
        Arc::new(UserRepository::new(pool.clone(), writer.clone())),
        Arc::new(BmiRepository::new(pool.clone(), writer.clone())),
        Arc::new(DietPlanRepository::new(pool.clone(), writer.clone())),
        Arc::new(MedicalRecordRepository::new(pool, writer)),
    )
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let database = open_database(config)?;
    let pool = database.pool.clone();
    let writer = database.writer.clone();
    let export_writer = Arc::new(ExportWriter::new(&config.export_dir));
    tracing::info!(
        "CSV exports in {} (append {})",
        config.export_dir.display(),
        if config.export_append { "on" } else { "off" }
    );

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let bmi_repository = Arc::new(BmiRepository::new(pool.clone(), writer.clone()));
    let diet_plan_repository = Arc::new(DietPlanRepository::new(pool.clone(), writer.clone()));
    let record_repository = Arc::new(MedicalRecordRepository::new(pool, writer));

    let mut user_service = UserService::new(user_repository);
    let mut bmi_service = BmiService::new(bmi_repository);
    let mut diet_plan_service = DietPlanService::new(diet_plan_repository);
    let mut record_service = MedicalRecordService::new(record_repository);
    if config.export_append {
        user_service = user_service.with_export_writer(export_writer.clone());
        bmi_service = bmi_service.with_export_writer(export_writer.clone());
        diet_plan_service = diet_plan_service.with_export_writer(export_writer.clone());
        record_service = record_service.with_export_writer(export_writer.clone());
    }

    let export_service = Arc::new(build_export_service(&database, export_writer));
    let auth = Arc::new(AuthManager::new(&config.secret_key, config.token_ttl));

    Ok(Arc::new(AppState {
        user_service: Arc::new(user_service),
        bmi_service: Arc::new(bmi_service),
        diet_plan_service: Arc::new(diet_plan_service),
        record_service: Arc::new(record_service),
        export_service,
        auth,
    }))
}
