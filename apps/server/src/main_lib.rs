use std::sync::Arc;

use chrono_tz::Tz;
use incentive_planner_core::{
    incentives::{Clock, IncentivePlannerService, IncentivePlannerServiceTrait, SystemClock},
    utils::time_utils::parse_timezone,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub planner_service: Arc<dyn IncentivePlannerServiceTrait + Send + Sync>,
    /// Zone for picker values submitted without one
    pub default_timezone: Tz,
}

pub fn init_tracing() {
    let log_format = std::env::var("IP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    build_state_with_clock(config, Arc::new(SystemClock))
}

/// Like [`build_state`] with an explicit time source.
pub fn build_state_with_clock(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<AppState>> {
    let default_timezone = parse_timezone(&config.default_timezone)
        .map_err(|e| anyhow::anyhow!("Invalid IP_DEFAULT_TIMEZONE: {}", e))?;
    tracing::info!("Default picker timezone: {}", default_timezone);

    let planner_service = Arc::new(IncentivePlannerService::new(clock));

    Ok(Arc::new(AppState {
        planner_service,
        default_timezone,
    }))
}
