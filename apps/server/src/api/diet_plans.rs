use std::sync::Arc;

use crate::{
    api::extract::{required, ApiJson, ApiQuery},
    auth::Session,
    error::ApiResult,
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use diet_consultant_core::diet_plans::DietPlanDocument;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

#[serde_as]
#[derive(Deserialize)]
struct DietPlanQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    bmi: Option<f64>,
}

#[serde_as]
#[derive(Deserialize)]
struct DietPlanRequest {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    bmi: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DietPlanResponse {
    success: bool,
    diet_plan: DietPlanDocument,
}

/// Returns the stored plan for this exact BMI, generating one on first use.
async fn get_diet_plan(
    session: Session,
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<DietPlanQuery>,
) -> ApiResult<Json<DietPlanResponse>> {
    let bmi = required(query.bmi, "bmi")?;
    let plan = state
        .diet_plan_service
        .get_or_generate(session.user_id, bmi)
        .await?;
    Ok(Json(DietPlanResponse {
        success: true,
        diet_plan: plan.plan,
    }))
}

async fn regenerate_diet_plan(
    session: Session,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<DietPlanRequest>,
) -> ApiResult<Json<DietPlanResponse>> {
    let bmi = required(payload.bmi, "bmi")?;
    let plan = state
        .diet_plan_service
        .regenerate(session.user_id, bmi)
        .await?;
    Ok(Json(DietPlanResponse {
        success: true,
        diet_plan: plan.plan,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/diet-plan", get(get_diet_plan).post(regenerate_diet_plan))
}
