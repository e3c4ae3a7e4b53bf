//! Incentive domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_DURATION_WEEKS, HARDWARE_SIGNER_MAX_DURATION_WEEKS, MIN_DURATION_WEEKS,
};
use crate::errors::{Result, ValidationError};
use crate::utils::CalendarInstant;

/// How the connected account signs transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignerType {
    /// Raw secret key held by the browser
    #[default]
    SecretKey,
    /// Hardware device; limited in how many operations it can sign at once
    Ledger,
    Freighter,
    Albedo,
    Lobstr,
    WalletConnect,
}

impl SignerType {
    pub fn is_hardware(&self) -> bool {
        matches!(self, SignerType::Ledger)
    }
}

/// Maximum incentive duration, in weeks, the signer can authorize.
pub fn max_duration_for(signer: SignerType) -> u32 {
    if signer.is_hardware() {
        HARDWARE_SIGNER_MAX_DURATION_WEEKS
    } else {
        DEFAULT_MAX_DURATION_WEEKS
    }
}

/// Inclusive range of allowed durations, in weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationBound {
    pub min: u32,
    pub max: u32,
}

impl DurationBound {
    pub fn for_signer(signer: SignerType) -> Self {
        Self {
            min: MIN_DURATION_WEEKS,
            max: max_duration_for(signer),
        }
    }

    pub fn contains(&self, weeks: u32) -> bool {
        (self.min..=self.max).contains(&weeks)
    }

    pub fn clamp(&self, weeks: u32) -> u32 {
        weeks.clamp(self.min, self.max.max(self.min))
    }
}

/// Monday-to-Sunday span covering one or more whole weeks. Both ends are
/// midnight; `end` is the last Sunday and is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekWindow {
    pub start: CalendarInstant,
    pub end: CalendarInstant,
}

impl WeekWindow {
    /// Whether `instant` falls on any day of the window.
    pub fn contains(&self, instant: CalendarInstant) -> Result<bool> {
        let end_exclusive = self.end.checked_add_days(1)?;
        Ok(self.start <= instant && instant < end_exclusive)
    }
}

/// Where an incentive stands relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncentiveStatus {
    Upcoming,
    Active,
    Finished,
}

/// The weeks an incentive pays out over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentivePeriod {
    pub start_date: CalendarInstant,
    pub end_date: CalendarInstant,
    pub duration_weeks: u32,
}

impl IncentivePeriod {
    pub fn from_window(window: WeekWindow, duration_weeks: u32) -> Self {
        Self {
            start_date: window.start,
            end_date: window.end,
            duration_weeks,
        }
    }

    pub fn window(&self) -> WeekWindow {
        WeekWindow {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Classifies the period against `now`. The end Sunday counts as active
    /// for its whole day.
    pub fn status(&self, now: DateTime<Utc>) -> Result<IncentiveStatus> {
        let now = CalendarInstant::from_utc(now);
        if now < self.start_date {
            return Ok(IncentiveStatus::Upcoming);
        }
        if self.window().contains(now)? {
            Ok(IncentiveStatus::Active)
        } else {
            Ok(IncentiveStatus::Finished)
        }
    }
}

/// One week's payment instruction for the transaction builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPayment {
    pub week_index: u32,
    pub effective_date: CalendarInstant,
    pub amount: Decimal,
}

/// The pair whose voters the incentive rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPair {
    pub base_asset: String,
    pub counter_asset: String,
}

impl MarketPair {
    pub fn new(base_asset: impl Into<String>, counter_asset: impl Into<String>) -> Self {
        Self {
            base_asset: base_asset.into(),
            counter_asset: counter_asset.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_asset.trim();
        let counter = self.counter_asset.trim();
        if base.is_empty() || counter.is_empty() {
            return Err(ValidationError::InvalidMarket(
                "both assets of the pair are required".to_string(),
            )
            .into());
        }
        if base == counter {
            return Err(ValidationError::InvalidMarket(format!(
                "pair assets must differ, got {} twice",
                base
            ))
            .into());
        }
        Ok(())
    }
}

/// Input for planning an incentive. `duration` is the raw text of the
/// duration control and is clamped to the signer's bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanIncentiveRequest {
    pub market: MarketPair,
    pub reward_asset: String,
    pub weekly_amount: Decimal,
    pub start_date: CalendarInstant,
    pub duration: String,
    #[serde(default)]
    pub signer: SignerType,
}

/// Everything the transaction builder needs to create an incentive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentivePlan {
    pub market: MarketPair,
    pub reward_asset: String,
    pub period: IncentivePeriod,
    pub weekly_amount: Decimal,
    pub total_amount: Decimal,
    pub payments: Vec<ScheduledPayment>,
}
