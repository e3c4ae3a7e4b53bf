use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{
        DurationLimits, DurationStep, DurationValue, IncentivePeriodPayload, MinimumStartDate,
        PlanIncentivePayload, SignerQuery, StatusResponse, WeekWindow, WeekWindowRequest,
    },
};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono_tz::Tz;
use incentive_planner_core::{
    incentives::{decrement, increment, IncentivePeriod, IncentivePlan, PlanIncentiveRequest},
    utils::time_utils::{normalize_picker_value, parse_local_datetime, parse_timezone},
    CalendarInstant,
};

fn resolve_timezone(state: &AppState, requested: Option<&str>) -> ApiResult<Tz> {
    match requested {
        Some(name) => Ok(parse_timezone(name)?),
        None => Ok(state.default_timezone),
    }
}

// Single entry point for picker values into UTC calendar fields.
fn picker_value_to_instant(
    state: &AppState,
    value: &str,
    timezone: Option<&str>,
) -> ApiResult<CalendarInstant> {
    let tz = resolve_timezone(state, timezone)?;
    let fields = parse_local_datetime(value)?;
    Ok(normalize_picker_value(fields, &tz))
}

#[utoipa::path(get, path = "/api/v1/incentives/minimum-start-date", responses((status = 200, body = MinimumStartDate)))]
pub async fn get_minimum_start_date(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MinimumStartDate>> {
    let date = state.planner_service.minimum_start_date()?;
    let cutoff = state.planner_service.collection_cutoff()?;
    Ok(Json(MinimumStartDate {
        date: date.date(),
        cutoff: cutoff.to_utc(),
    }))
}

#[utoipa::path(get, path = "/api/v1/incentives/current-week", responses((status = 200, body = WeekWindow)))]
pub async fn get_current_week(State(state): State<Arc<AppState>>) -> ApiResult<Json<WeekWindow>> {
    let window = state.planner_service.current_week_window()?;
    Ok(Json(window.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/incentives/duration-bound",
    params(("signer" = Option<String>, Query, description = "Signer type, e.g. LEDGER")),
    responses((status = 200, body = DurationLimits))
)]
pub async fn get_duration_bound(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SignerQuery>,
) -> ApiResult<Json<DurationLimits>> {
    Ok(Json(state.planner_service.duration_bound(query.signer).into()))
}

#[utoipa::path(post, path = "/api/v1/incentives/duration/increment", request_body = DurationStep, responses((status = 200, body = DurationValue)))]
pub async fn increment_duration(
    State(state): State<Arc<AppState>>,
    Json(step): Json<DurationStep>,
) -> ApiResult<Json<DurationValue>> {
    let bound = state.planner_service.duration_bound(step.signer);
    Ok(Json(DurationValue {
        duration: increment(&step.duration, bound.max),
    }))
}

#[utoipa::path(post, path = "/api/v1/incentives/duration/decrement", request_body = DurationStep, responses((status = 200, body = DurationValue)))]
pub async fn decrement_duration(
    State(state): State<Arc<AppState>>,
    Json(step): Json<DurationStep>,
) -> ApiResult<Json<DurationValue>> {
    let bound = state.planner_service.duration_bound(step.signer);
    Ok(Json(DurationValue {
        duration: decrement(&step.duration, bound.max),
    }))
}

#[utoipa::path(post, path = "/api/v1/incentives/window", request_body = WeekWindowRequest, responses((status = 200, body = WeekWindow)))]
pub async fn compute_week_window(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WeekWindowRequest>,
) -> ApiResult<Json<WeekWindow>> {
    let anchor = picker_value_to_instant(&state, &request.anchor, request.timezone.as_deref())?;
    let window = state
        .planner_service
        .week_window(anchor, request.duration_weeks)?;
    Ok(Json(window.into()))
}

#[utoipa::path(post, path = "/api/v1/incentives/plan", request_body = PlanIncentivePayload, responses((status = 200, description = "Incentive plan")))]
pub async fn plan_incentive(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PlanIncentivePayload>,
) -> ApiResult<Json<IncentivePlan>> {
    let start_date =
        picker_value_to_instant(&state, &payload.start_date, payload.timezone.as_deref())?;
    let request = PlanIncentiveRequest {
        market: payload.market,
        reward_asset: payload.reward_asset,
        weekly_amount: payload.weekly_amount,
        start_date,
        duration: payload.duration,
        signer: payload.signer,
    };
    let plan = state.planner_service.plan_incentive(request)?;
    tracing::info!(
        "Planned {} weekly payments starting {}",
        plan.payments.len(),
        plan.period.start_date
    );
    Ok(Json(plan))
}

#[utoipa::path(post, path = "/api/v1/incentives/status", request_body = IncentivePeriodPayload, responses((status = 200, body = StatusResponse)))]
pub async fn get_incentive_status(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<IncentivePeriodPayload>,
) -> ApiResult<Json<StatusResponse>> {
    let period: IncentivePeriod = payload.into();
    let status = state.planner_service.incentive_status(&period)?;
    Ok(Json(StatusResponse { status }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/incentives/minimum-start-date",
            get(get_minimum_start_date),
        )
        .route("/incentives/current-week", get(get_current_week))
        .route("/incentives/duration-bound", get(get_duration_bound))
        .route("/incentives/duration/increment", post(increment_duration))
        .route("/incentives/duration/decrement", post(decrement_duration))
        .route("/incentives/window", post(compute_week_window))
        .route("/incentives/plan", post(plan_incentive))
        .route("/incentives/status", post(get_incentive_status))
}
