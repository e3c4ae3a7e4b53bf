use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::utils::CalendarInstant;

use super::duration::clamp_duration;
use super::incentives_model::{
    DurationBound, IncentivePeriod, IncentivePlan, IncentiveStatus, PlanIncentiveRequest,
    SignerType, WeekWindow,
};
use super::incentives_traits::{Clock, IncentivePlannerServiceTrait};
use super::payment_expander::expand_weekly_operations;
use super::start_date_policy::{collection_cutoff, is_allowed_start, minimum_start_monday};
use super::week_window::{current_week_window, week_window};

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(crate) fn validate_weekly_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount).into());
    }
    Ok(())
}

pub(crate) fn validate_start_date(start_date: CalendarInstant, now: DateTime<Utc>) -> Result<()> {
    if is_allowed_start(start_date, now)? {
        return Ok(());
    }
    let earliest = minimum_start_monday(now)?;
    Err(ValidationError::StartDateNotAllowed {
        date: start_date.date().to_string(),
        earliest: earliest.date().to_string(),
    }
    .into())
}

/// Validates a request and turns it into a plan as of `now`.
pub fn build_plan(request: PlanIncentiveRequest, now: DateTime<Utc>) -> Result<IncentivePlan> {
    request.market.validate()?;
    if request.reward_asset.trim().is_empty() {
        return Err(ValidationError::MissingField("rewardAsset".to_string()).into());
    }
    validate_weekly_amount(request.weekly_amount)?;
    validate_start_date(request.start_date, now)?;

    let bound = DurationBound::for_signer(request.signer);
    let duration_weeks = clamp_duration(&request.duration, bound.max);

    let window = week_window(request.start_date, duration_weeks)?;
    let period = IncentivePeriod::from_window(window, duration_weeks);
    let payments =
        expand_weekly_operations(period.start_date, request.weekly_amount, duration_weeks.into())?;
    let total_amount = request
        .weekly_amount
        .checked_mul(Decimal::from(duration_weeks))
        .ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "total of {} x {} weeks overflows",
                request.weekly_amount, duration_weeks
            ))
        })?;

    debug!(
        "Planned incentive on {}/{}: {} {} per week from {} to {} ({} payments)",
        request.market.base_asset,
        request.market.counter_asset,
        request.weekly_amount,
        request.reward_asset,
        period.start_date,
        period.end_date,
        payments.len()
    );

    Ok(IncentivePlan {
        market: request.market,
        reward_asset: request.reward_asset,
        period,
        weekly_amount: request.weekly_amount,
        total_amount,
        payments,
    })
}

pub struct IncentivePlannerService {
    clock: Arc<dyn Clock>,
}

impl IncentivePlannerService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        IncentivePlannerService { clock }
    }
}

impl IncentivePlannerServiceTrait for IncentivePlannerService {
    fn minimum_start_date(&self) -> Result<CalendarInstant> {
        minimum_start_monday(self.clock.now())
    }

    fn collection_cutoff(&self) -> Result<CalendarInstant> {
        collection_cutoff(self.clock.now())
    }

    fn current_week_window(&self) -> Result<WeekWindow> {
        current_week_window(self.clock.now())
    }

    fn duration_bound(&self, signer: SignerType) -> DurationBound {
        DurationBound::for_signer(signer)
    }

    fn week_window(&self, anchor: CalendarInstant, duration_weeks: u32) -> Result<WeekWindow> {
        week_window(anchor, duration_weeks)
    }

    fn plan_incentive(&self, request: PlanIncentiveRequest) -> Result<IncentivePlan> {
        build_plan(request, self.clock.now())
    }

    fn incentive_status(&self, period: &IncentivePeriod) -> Result<IncentiveStatus> {
        period.status(self.clock.now())
    }
}
