//! Tests for the incentive planner service.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::incentives::{
        FixedClock, IncentivePlannerService, IncentivePlannerServiceTrait, IncentiveStatus,
        MarketPair, PlanIncentiveRequest, SignerType,
    };
    use crate::utils::CalendarInstant;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> CalendarInstant {
        CalendarInstant::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    // Saturday before the 2024-06-02 cutoff
    fn service() -> IncentivePlannerService {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        IncentivePlannerService::new(Arc::new(FixedClock(now)))
    }

    fn request(duration: &str, signer: SignerType) -> PlanIncentiveRequest {
        PlanIncentiveRequest {
            market: MarketPair::new("AQUA", "XLM"),
            reward_asset: "AQUA".to_string(),
            weekly_amount: dec!(1000),
            start_date: date(2024, 6, 3),
            duration: duration.to_string(),
            signer,
        }
    }

    #[test]
    fn test_minimum_start_date_uses_clock() {
        assert_eq!(service().minimum_start_date().unwrap(), date(2024, 6, 3));
    }

    #[test]
    fn test_current_week_window_uses_clock() {
        let window = service().current_week_window().unwrap();
        assert_eq!(window.start, date(2024, 5, 27));
        assert_eq!(window.end, date(2024, 6, 2));
    }

    #[test]
    fn test_plan_four_week_incentive() {
        let plan = service()
            .plan_incentive(request("4", SignerType::SecretKey))
            .unwrap();

        assert_eq!(plan.period.start_date, date(2024, 6, 3));
        assert_eq!(plan.period.end_date, date(2024, 6, 30));
        assert_eq!(plan.period.duration_weeks, 4);
        assert_eq!(plan.total_amount, dec!(4000));
        assert_eq!(plan.payments.len(), 4);
        assert_eq!(plan.payments[0].effective_date, date(2024, 6, 2));
        assert_eq!(plan.payments[3].effective_date, date(2024, 6, 23));
    }

    #[test]
    fn test_plan_clamps_duration_for_hardware_signer() {
        let plan = service()
            .plan_incentive(request("12", SignerType::Ledger))
            .unwrap();

        assert_eq!(plan.period.duration_weeks, 5);
        assert_eq!(plan.payments.len(), 5);
        assert_eq!(plan.period.end_date, date(2024, 7, 7));
        assert_eq!(plan.total_amount, dec!(5000));
    }

    #[test]
    fn test_plan_treats_garbage_duration_as_one_week() {
        let plan = service()
            .plan_incentive(request("many", SignerType::SecretKey))
            .unwrap();
        assert_eq!(plan.period.duration_weeks, 1);
        assert_eq!(plan.payments.len(), 1);
    }

    #[test]
    fn test_plan_rejects_disallowed_start() {
        let mut req = request("2", SignerType::SecretKey);
        req.start_date = date(2024, 5, 27);

        let err = service().plan_incentive(req).unwrap_err();

        match err {
            Error::Validation(ValidationError::StartDateNotAllowed { date, earliest }) => {
                assert_eq!(date, "2024-05-27");
                assert_eq!(earliest, "2024-06-03");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plan_rejects_non_monday_start() {
        let mut req = request("2", SignerType::SecretKey);
        req.start_date = date(2024, 6, 5);
        assert!(service().plan_incentive(req).is_err());
    }

    #[test]
    fn test_plan_rejects_non_positive_amount() {
        let mut req = request("2", SignerType::SecretKey);
        req.weekly_amount = dec!(0);
        assert!(matches!(
            service().plan_incentive(req),
            Err(Error::Validation(ValidationError::NonPositiveAmount(_)))
        ));
    }

    #[test]
    fn test_plan_rejects_overflowing_total() {
        let mut req = request("2", SignerType::SecretKey);
        req.weekly_amount = rust_decimal::Decimal::MAX;
        assert!(matches!(
            service().plan_incentive(req),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_plan_rejects_invalid_market() {
        let mut req = request("2", SignerType::SecretKey);
        req.market = MarketPair::new("XLM", "XLM");
        assert!(matches!(
            service().plan_incentive(req),
            Err(Error::Validation(ValidationError::InvalidMarket(_)))
        ));
    }

    #[test]
    fn test_plan_requires_reward_asset() {
        let mut req = request("2", SignerType::SecretKey);
        req.reward_asset = " ".to_string();
        assert!(matches!(
            service().plan_incentive(req),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_incentive_status_uses_clock() {
        let plan = service()
            .plan_incentive(request("2", SignerType::SecretKey))
            .unwrap();
        assert_eq!(
            service().incentive_status(&plan.period).unwrap(),
            IncentiveStatus::Upcoming
        );
    }

    #[test]
    fn test_plan_request_deserializes_from_camel_case() {
        let json = r#"{
            "market": { "baseAsset": "AQUA", "counterAsset": "XLM" },
            "rewardAsset": "AQUA",
            "weeklyAmount": 12.5,
            "startDate": "2024-06-03T00:00:00Z",
            "duration": "3"
        }"#;
        let parsed: PlanIncentiveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.weekly_amount, dec!(12.5));
        assert_eq!(parsed.signer, SignerType::SecretKey);
        assert_eq!(parsed.start_date, date(2024, 6, 3));
    }
}
