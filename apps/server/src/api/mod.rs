use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        DurationLimits, DurationStep, DurationValue, IncentivePeriodPayload, MinimumStartDate,
        PlanIncentivePayload, StatusResponse, WeekWindow, WeekWindowRequest,
    },
};

pub mod incentives;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        incentives::get_minimum_start_date,
        incentives::get_current_week,
        incentives::get_duration_bound,
        incentives::increment_duration,
        incentives::decrement_duration,
        incentives::compute_week_window,
        incentives::plan_incentive,
        incentives::get_incentive_status
    ),
    components(schemas(
        MinimumStartDate,
        WeekWindow,
        DurationLimits,
        DurationStep,
        DurationValue,
        WeekWindowRequest,
        PlanIncentivePayload,
        IncentivePeriodPayload,
        StatusResponse
    )),
    tags((name = "incentive-planner"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(incentives::router());

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
