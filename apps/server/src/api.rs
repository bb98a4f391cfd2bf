use std::{sync::Arc, time::Duration};

use crate::{auth::require_session, config::Config, error::ApiError, main_lib::AppState};
use axum::{error_handling::HandleErrorLayer, http::HeaderValue, middleware, BoxError, Router};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

mod admin;
mod bmi;
mod diet_plans;
mod extract;
mod health;
mod records;
mod users;

pub use health::healthz;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    let cors = cors.allow_methods(Any).allow_headers(Any);

    let protected = Router::new()
        .merge(bmi::router())
        .merge(diet_plans::router())
        .merge(records::router())
        .merge(admin::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let api = Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(protected);

    let router = Router::new().nest("/api", api).with_state(state).layer(cors);
    with_request_timeout(router, config.request_timeout)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Requests running past `timeout` get a 408 in the usual error envelope.
fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout))
            .timeout(timeout),
    )
}

async fn handle_timeout(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(format!("Unhandled middleware error: {err}"))
    }
}
