//! Tests for incentive domain models.

#[cfg(test)]
mod tests {
    use crate::incentives::{
        max_duration_for, week_window, DurationBound, IncentivePeriod, IncentiveStatus,
        MarketPair, SignerType,
    };
    use crate::utils::CalendarInstant;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> CalendarInstant {
        CalendarInstant::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn june_period() -> IncentivePeriod {
        IncentivePeriod::from_window(week_window(date(2024, 6, 3), 4).unwrap(), 4)
    }

    // ==================== SignerType Tests ====================

    #[test]
    fn test_signer_type_serialization() {
        assert_eq!(
            serde_json::to_string(&SignerType::Ledger).unwrap(),
            "\"LEDGER\""
        );
        assert_eq!(
            serde_json::to_string(&SignerType::WalletConnect).unwrap(),
            "\"WALLET_CONNECT\""
        );
        assert_eq!(
            serde_json::from_str::<SignerType>("\"SECRET_KEY\"").unwrap(),
            SignerType::SecretKey
        );
    }

    #[test]
    fn test_max_duration_by_signer() {
        assert_eq!(max_duration_for(SignerType::Ledger), 5);
        assert_eq!(max_duration_for(SignerType::SecretKey), 100);
        assert_eq!(max_duration_for(SignerType::Freighter), 100);
        assert_eq!(max_duration_for(SignerType::WalletConnect), 100);
    }

    // ==================== DurationBound Tests ====================

    #[test]
    fn test_duration_bound_for_signer() {
        let bound = DurationBound::for_signer(SignerType::Ledger);
        assert_eq!(bound, DurationBound { min: 1, max: 5 });
        assert!(bound.contains(5));
        assert!(!bound.contains(6));
        assert!(!bound.contains(0));
    }

    #[test]
    fn test_duration_bound_clamp() {
        let bound = DurationBound::for_signer(SignerType::Albedo);
        assert_eq!(bound.clamp(0), 1);
        assert_eq!(bound.clamp(64), 64);
        assert_eq!(bound.clamp(500), 100);
    }

    // ==================== IncentivePeriod Tests ====================

    #[test]
    fn test_period_status_upcoming() {
        let now = Utc.with_ymd_and_hms(2024, 6, 2, 23, 59, 59).unwrap();
        assert_eq!(june_period().status(now).unwrap(), IncentiveStatus::Upcoming);
    }

    #[test]
    fn test_period_status_active_through_last_sunday() {
        let period = june_period();
        let first_moment = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        let last_evening = Utc.with_ymd_and_hms(2024, 6, 30, 23, 0, 0).unwrap();
        assert_eq!(period.status(first_moment).unwrap(), IncentiveStatus::Active);
        assert_eq!(period.status(last_evening).unwrap(), IncentiveStatus::Active);
    }

    #[test]
    fn test_period_status_finished() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(june_period().status(now).unwrap(), IncentiveStatus::Finished);
    }

    #[test]
    fn test_period_serialization() {
        let json = serde_json::to_value(june_period()).unwrap();
        assert_eq!(json["startDate"], "2024-06-03T00:00:00Z");
        assert_eq!(json["endDate"], "2024-06-30T00:00:00Z");
        assert_eq!(json["durationWeeks"], 4);
    }

    // ==================== MarketPair Tests ====================

    #[test]
    fn test_market_pair_validation() {
        assert!(MarketPair::new("AQUA", "XLM").validate().is_ok());
        assert!(MarketPair::new("", "XLM").validate().is_err());
        assert!(MarketPair::new("AQUA", "  ").validate().is_err());
        assert!(MarketPair::new("XLM", " XLM ").validate().is_err());
    }
}
