use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::utils::CalendarInstant;

use super::incentives_model::{
    DurationBound, IncentivePeriod, IncentivePlan, IncentiveStatus, PlanIncentiveRequest,
    SignerType, WeekWindow,
};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Trait for incentive planning operations
pub trait IncentivePlannerServiceTrait: Send + Sync {
    fn minimum_start_date(&self) -> Result<CalendarInstant>;
    fn collection_cutoff(&self) -> Result<CalendarInstant>;
    fn current_week_window(&self) -> Result<WeekWindow>;
    fn duration_bound(&self, signer: SignerType) -> DurationBound;
    fn week_window(&self, anchor: CalendarInstant, duration_weeks: u32) -> Result<WeekWindow>;
    fn plan_incentive(&self, request: PlanIncentiveRequest) -> Result<IncentivePlan>;
    fn incentive_status(&self, period: &IncentivePeriod) -> Result<IncentiveStatus>;
}
