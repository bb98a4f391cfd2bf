use std::sync::Arc;

use crate::{
    api::extract::{required, ApiJson},
    auth::Session,
    error::ApiResult,
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use diet_consultant_core::bmi::{BmiCategory, BmiInput, BmiRecord};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Height (cm) and weight (kg); form inputs may submit them as strings.
#[serde_as]
#[derive(Deserialize)]
struct BmiRequest {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    height: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    weight: Option<f64>,
}

#[derive(Serialize)]
struct BmiResponse {
    success: bool,
    bmi: f64,
    category: BmiCategory,
}

#[derive(Serialize)]
struct BmiHistoryResponse {
    success: bool,
    bmi_records: Vec<BmiRecord>,
}

async fn calculate_bmi(
    session: Session,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<BmiRequest>,
) -> ApiResult<Json<BmiResponse>> {
    let input = BmiInput {
        height: required(payload.height, "height")?,
        weight: required(payload.weight, "weight")?,
    };
    let record = state.bmi_service.record_bmi(session.user_id, input).await?;
    Ok(Json(BmiResponse {
        success: true,
        bmi: record.bmi,
        category: record.category,
    }))
}

async fn bmi_history(
    session: Session,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BmiHistoryResponse>> {
    let bmi_records = state.bmi_service.get_history(session.user_id)?;
    Ok(Json(BmiHistoryResponse {
        success: true,
        bmi_records,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/bmi", get(bmi_history).post(calculate_bmi))
}
