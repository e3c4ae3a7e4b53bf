//! Incentives module - period scheduling, duration control, payment expansion
//! and the creation form.

mod duration;
mod incentive_form;
mod incentives_model;
mod incentives_service;
mod incentives_traits;
mod payment_expander;
mod start_date_policy;
mod week_window;

#[cfg(test)]
mod incentives_model_tests;
#[cfg(test)]
mod incentives_service_tests;

pub use duration::{clamp_duration, decrement, increment};
pub use incentive_form::{FormAction, FormStep, IncentiveForm};
pub use incentives_model::{
    max_duration_for, DurationBound, IncentivePeriod, IncentivePlan, IncentiveStatus, MarketPair,
    PlanIncentiveRequest, ScheduledPayment, SignerType, WeekWindow,
};
pub use incentives_service::{build_plan, FixedClock, IncentivePlannerService, SystemClock};
pub use incentives_traits::{Clock, IncentivePlannerServiceTrait};
pub use payment_expander::expand_weekly_operations;
pub use start_date_policy::{collection_cutoff, is_allowed_start, minimum_start_monday};
pub use week_window::{
    current_week_window, end_of_week, start_of_week, week_window, week_window_from_local,
};
