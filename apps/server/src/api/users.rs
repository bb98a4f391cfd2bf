use std::sync::Arc;

use crate::{
    api::extract::ApiJson,
    error::ApiResult,
    main_lib::AppState,
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use diet_consultant_core::users::{Credentials, Signup};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct SignupRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    success: bool,
    name: String,
    access_token: String,
    token_type: &'static str,
    expires_in: u64,
}

async fn signup(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let user = state
        .user_service
        .signup(Signup {
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            password: payload.password.unwrap_or_default(),
        })
        .await?;
    tracing::info!("User {} signed up", user.id);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "User registered successfully",
        }),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state.user_service.login(Credentials {
        email: payload.email.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    })?;
    let token = state.auth.issue_token(user.id)?;
    Ok(Json(LoginResponse {
        success: true,
        name: user.name,
        access_token: token,
        token_type: "Bearer",
        expires_in: state.auth.expires_in().as_secs(),
    }))
}

/// Routes that do not require a session.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}
