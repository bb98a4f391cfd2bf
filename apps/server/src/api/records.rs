use std::sync::Arc;

use crate::{
    api::extract::{required, ApiJson},
    auth::Session,
    error::ApiResult,
    main_lib::AppState,
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use diet_consultant_core::records::{MedicalRecord, MedicalRecordInput};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordRequest {
    date: Option<String>,
    blood_pressure: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    blood_sugar: Option<f64>,
    notes: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct RecordsResponse {
    success: bool,
    records: Vec<MedicalRecord>,
}

async fn add_record(
    session: Session,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<RecordRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let input = MedicalRecordInput {
        date: required(payload.date, "date")?,
        blood_pressure: required(payload.blood_pressure, "bloodPressure")?,
        blood_sugar: required(payload.blood_sugar, "bloodSugar")?,
        notes: payload.notes,
    };
    state.record_service.add_record(session.user_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "Medical record added successfully",
        }),
    ))
}

async fn list_records(
    session: Session,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RecordsResponse>> {
    let records = state.record_service.get_records(session.user_id)?;
    Ok(Json(RecordsResponse {
        success: true,
        records,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/records", get(list_records).post(add_record))
}
