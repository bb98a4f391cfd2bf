//! Administrative listings and the full CSV export.

use std::sync::Arc;

use crate::{
    api::extract::ApiQuery,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use diet_consultant_core::{
    bmi::BmiRecord, diet_plans::DietPlan, exports::ExportSummary, records::MedicalRecord,
    users::User, UserFilter,
};
use serde::{Deserialize, Serialize};
use tokio::task;

#[derive(Deserialize)]
struct UserFilterQuery {
    user_id: Option<String>,
}

impl UserFilterQuery {
    fn filter(&self) -> ApiResult<UserFilter> {
        Ok(UserFilter::from_query(self.user_id.as_deref())?)
    }
}

#[derive(Serialize)]
struct UsersResponse {
    success: bool,
    users: Vec<User>,
}

#[derive(Serialize)]
struct BmiRecordsResponse {
    success: bool,
    bmi_records: Vec<BmiRecord>,
}

#[derive(Serialize)]
struct DietPlansResponse {
    success: bool,
    diet_plans: Vec<DietPlan>,
}

#[derive(Serialize)]
struct MedicalRecordsResponse {
    success: bool,
    records: Vec<MedicalRecord>,
}

#[derive(Serialize)]
struct ExportResponse {
    success: bool,
    files: ExportSummary,
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<UsersResponse>> {
    let users = state.user_service.list_users()?;
    Ok(Json(UsersResponse {
        success: true,
        users,
    }))
}

async fn list_bmi_records(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<UserFilterQuery>,
) -> ApiResult<Json<BmiRecordsResponse>> {
    let bmi_records = state.bmi_service.list_records(query.filter()?)?;
    Ok(Json(BmiRecordsResponse {
        success: true,
        bmi_records,
    }))
}

async fn list_diet_plans(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<UserFilterQuery>,
) -> ApiResult<Json<DietPlansResponse>> {
    let diet_plans = state.diet_plan_service.list_plans(query.filter()?)?;
    Ok(Json(DietPlansResponse {
        success: true,
        diet_plans,
    }))
}

async fn list_medical_records(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<UserFilterQuery>,
) -> ApiResult<Json<MedicalRecordsResponse>> {
    let records = state.record_service.list_records(query.filter()?)?;
    Ok(Json(MedicalRecordsResponse {
        success: true,
        records,
    }))
}

async fn export_all(State(state): State<Arc<AppState>>) -> ApiResult<Json<ExportResponse>> {
    let export_service = state.export_service.clone();
    let files = task::spawn_blocking(move || export_service.export_all())
        .await
        .map_err(|e| ApiError::Internal(format!("Export task failed: {e}")))??;
    tracing::info!("Full export written: {}", files.users);
    Ok(Json(ExportResponse {
        success: true,
        files,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/users", get(list_users))
        .route("/admin/bmi", get(list_bmi_records))
        .route("/admin/diet-plans", get(list_diet_plans))
        .route("/admin/medical-records", get(list_medical_records))
        .route("/admin/export", post(export_all))
}
