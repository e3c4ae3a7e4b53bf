use chrono::{DateTime, NaiveDate, Utc};
use incentive_planner_core::{
    incentives::{self as core_incentives, DurationBound, IncentiveStatus, MarketPair, SignerType},
    CalendarInstant,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MinimumStartDate {
    /// Earliest Monday an incentive may start on
    pub date: NaiveDate,
    /// Collection cutoff that decided it
    pub cutoff: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<core_incentives::WeekWindow> for WeekWindow {
    fn from(w: core_incentives::WeekWindow) -> Self {
        Self {
            start: w.start.to_utc(),
            end: w.end.to_utc(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SignerQuery {
    #[serde(default)]
    pub signer: SignerType,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DurationLimits {
    pub min: u32,
    pub max: u32,
}

impl From<DurationBound> for DurationLimits {
    fn from(b: DurationBound) -> Self {
        Self {
            min: b.min,
            max: b.max,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DurationStep {
    /// Current text of the duration control
    pub duration: String,
    #[serde(default)]
    #[schema(value_type = String, example = "LEDGER")]
    pub signer: SignerType,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DurationValue {
    pub duration: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeekWindowRequest {
    /// Wall-clock value from the date picker, e.g. `2024-06-05T09:30:00`
    pub anchor: String,
    /// IANA zone of the picker; the server default applies when absent
    pub timezone: Option<String>,
    pub duration_weeks: u32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlanIncentivePayload {
    #[schema(value_type = Object)]
    pub market: MarketPair,
    pub reward_asset: String,
    #[schema(value_type = f64)]
    pub weekly_amount: Decimal,
    /// Wall-clock start date from the date picker
    pub start_date: String,
    pub timezone: Option<String>,
    pub duration: String,
    #[serde(default)]
    #[schema(value_type = String, example = "SECRET_KEY")]
    pub signer: SignerType,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncentivePeriodPayload {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_weeks: u32,
}

impl From<IncentivePeriodPayload> for core_incentives::IncentivePeriod {
    fn from(p: IncentivePeriodPayload) -> Self {
        Self {
            start_date: CalendarInstant::from_utc(p.start_date),
            end_date: CalendarInstant::from_utc(p.end_date),
            duration_weeks: p.duration_weeks,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: IncentiveStatus,
}
