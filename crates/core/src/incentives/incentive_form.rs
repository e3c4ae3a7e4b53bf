//! Incentive creation form as an explicit state machine.
//!
//! The form walks `SelectMarket -> SetReward -> SetPeriod -> Submit`. Each
//! forward transition is gated by validating its input; a rejected action
//! leaves the form exactly as it was.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::CalendarInstant;

use super::duration::{clamp_duration, decrement, increment};
use super::incentives_model::{
    DurationBound, IncentivePeriod, IncentivePlan, MarketPair, PlanIncentiveRequest, SignerType,
};
use super::incentives_service::{build_plan, validate_start_date, validate_weekly_amount};
use super::week_window::week_window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormStep {
    #[default]
    SelectMarket,
    SetReward,
    SetPeriod,
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SelectMarket(MarketPair),
    SetReward {
        asset: String,
        weekly_amount: Decimal,
    },
    SetPeriod {
        start_date: CalendarInstant,
    },
    /// Raw text typed into the duration control
    ChangeDuration(String),
    IncrementDuration,
    DecrementDuration,
    SignerChanged(SignerType),
    Back,
    Reset,
}

impl FormAction {
    fn name(&self) -> &'static str {
        match self {
            FormAction::SelectMarket(_) => "select a market",
            FormAction::SetReward { .. } => "set the reward",
            FormAction::SetPeriod { .. } => "set the period",
            FormAction::ChangeDuration(_) => "change the duration",
            FormAction::IncrementDuration => "increment the duration",
            FormAction::DecrementDuration => "decrement the duration",
            FormAction::SignerChanged(_) => "change the signer",
            FormAction::Back => "go back",
            FormAction::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncentiveForm {
    step: FormStep,
    market: Option<MarketPair>,
    reward_asset: Option<String>,
    weekly_amount: Option<Decimal>,
    start_date: Option<CalendarInstant>,
    duration: String,
    signer: SignerType,
}

impl IncentiveForm {
    pub fn new(signer: SignerType) -> Self {
        Self {
            step: FormStep::SelectMarket,
            market: None,
            reward_asset: None,
            weekly_amount: None,
            start_date: None,
            duration: "1".to_string(),
            signer,
        }
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn market(&self) -> Option<&MarketPair> {
        self.market.as_ref()
    }

    pub fn reward_asset(&self) -> Option<&str> {
        self.reward_asset.as_deref()
    }

    pub fn weekly_amount(&self) -> Option<Decimal> {
        self.weekly_amount
    }

    pub fn start_date(&self) -> Option<CalendarInstant> {
        self.start_date
    }

    /// Text currently shown in the duration control.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn signer(&self) -> SignerType {
        self.signer
    }

    pub fn duration_bound(&self) -> DurationBound {
        DurationBound::for_signer(self.signer)
    }

    pub fn duration_weeks(&self) -> u32 {
        clamp_duration(&self.duration, self.duration_bound().max)
    }

    /// Period for the chosen start date and duration, once a date is set.
    pub fn period(&self) -> Result<Option<IncentivePeriod>> {
        let Some(start_date) = self.start_date else {
            return Ok(None);
        };
        let weeks = self.duration_weeks();
        let window = week_window(start_date, weeks)?;
        Ok(Some(IncentivePeriod::from_window(window, weeks)))
    }

    /// Applies `action` and returns the resulting step.
    pub fn apply(&mut self, action: FormAction, now: DateTime<Utc>) -> Result<FormStep> {
        match action {
            FormAction::SelectMarket(market) => {
                self.expect_step(&[FormStep::SelectMarket], "select a market")?;
                market.validate()?;
                self.market = Some(market);
                self.step = FormStep::SetReward;
            }
            FormAction::SetReward {
                asset,
                weekly_amount,
            } => {
                self.expect_step(&[FormStep::SetReward], "set the reward")?;
                if asset.trim().is_empty() {
                    return Err(ValidationError::MissingField("rewardAsset".to_string()).into());
                }
                validate_weekly_amount(weekly_amount)?;
                self.reward_asset = Some(asset);
                self.weekly_amount = Some(weekly_amount);
                self.step = FormStep::SetPeriod;
            }
            FormAction::SetPeriod { start_date } => {
                self.expect_step(&[FormStep::SetPeriod, FormStep::Submit], "set the period")?;
                validate_start_date(start_date, now)?;
                self.start_date = Some(start_date);
                self.step = FormStep::Submit;
            }
            FormAction::ChangeDuration(_)
            | FormAction::IncrementDuration
            | FormAction::DecrementDuration => {
                let name = action.name();
                self.expect_step(&[FormStep::SetPeriod, FormStep::Submit], name)?;
                let max = self.duration_bound().max;
                self.duration = match action {
                    FormAction::ChangeDuration(text) => text,
                    FormAction::IncrementDuration => increment(&self.duration, max),
                    _ => decrement(&self.duration, max),
                };
            }
            FormAction::SignerChanged(signer) => {
                self.signer = signer;
                let max = self.duration_bound().max;
                if clamp_duration(&self.duration, max) < self.duration_weeks_unbounded() {
                    debug!("Duration {} exceeds new bound {}, clamping", self.duration, max);
                    self.duration = max.to_string();
                }
            }
            FormAction::Back => {
                self.step = match self.step {
                    FormStep::SelectMarket => {
                        return Err(self.invalid_transition(action.name()).into())
                    }
                    FormStep::SetReward => FormStep::SelectMarket,
                    FormStep::SetPeriod => FormStep::SetReward,
                    FormStep::Submit => FormStep::SetPeriod,
                };
            }
            FormAction::Reset => {
                *self = Self::new(self.signer);
            }
        }
        Ok(self.step)
    }

    /// Builds the plan from a completed form, then resets it. The start date
    /// is checked again because the cutoff may have passed since it was
    /// picked.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<IncentivePlan> {
        self.expect_step(&[FormStep::Submit], "submit")?;
        let request = PlanIncentiveRequest {
            market: self
                .market
                .clone()
                .ok_or_else(|| ValidationError::MissingField("market".to_string()))?,
            reward_asset: self
                .reward_asset
                .clone()
                .ok_or_else(|| ValidationError::MissingField("rewardAsset".to_string()))?,
            weekly_amount: self
                .weekly_amount
                .ok_or_else(|| ValidationError::MissingField("weeklyAmount".to_string()))?,
            start_date: self
                .start_date
                .ok_or_else(|| ValidationError::MissingField("startDate".to_string()))?,
            duration: self.duration.clone(),
            signer: self.signer,
        };
        let plan = build_plan(request, now)?;
        *self = Self::new(self.signer);
        Ok(plan)
    }

    // Duration as typed, floored, with no upper bound.
    fn duration_weeks_unbounded(&self) -> u32 {
        clamp_duration(&self.duration, u32::MAX)
    }

    fn expect_step(&self, allowed: &[FormStep], action: &str) -> Result<()> {
        if allowed.contains(&self.step) {
            Ok(())
        } else {
            Err(self.invalid_transition(action).into())
        }
    }

    fn invalid_transition(&self, action: &str) -> ValidationError {
        ValidationError::InvalidTransition {
            action: action.to_string(),
            step: self.step,
        }
    }
}
