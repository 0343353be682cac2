use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use brier_core::models::*;

fn record(p: u8, outcome: Option<bool>) -> PredictionRecord {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let input = NewPrediction::new("e", "f", Probability::new(i64::from(p)).unwrap(), Category::Other);
    let mut record = PredictionRecord::new("prop", input, at).unwrap();
    if let Some(outcome) = outcome {
        record.resolve(outcome, None, at + Duration::hours(1)).unwrap();
    }
    record
}

proptest! {
    #[test]
    fn probability_accepts_exactly_the_unit_range(value in -1_000i64..1_000) {
        let parsed = Probability::new(value);
        prop_assert_eq!(parsed.is_ok(), (0..=100).contains(&value));
        let clamped = Probability::clamped(value).percent();
        prop_assert!(clamped <= 100);
        if let Ok(p) = parsed {
            prop_assert_eq!(i64::from(p.percent()), value);
            prop_assert_eq!(clamped, p.percent());
        }
    }

    #[test]
    fn correctness_matches_direction(p in 0u8..=100, outcome in any::<bool>()) {
        let r = record(p, Some(outcome));
        let expected = (outcome && p > 50) || (!outcome && p < 50);
        prop_assert_eq!(r.is_correct(), expected);
        let err = r.squared_error().unwrap();
        prop_assert!((0.0..=1.0).contains(&err));
    }

    #[test]
    fn pending_is_never_correct(p in 0u8..=100) {
        let r = record(p, None);
        prop_assert!(!r.is_correct());
        prop_assert!(r.squared_error().is_none());
    }

    #[test]
    fn streak_never_exceeds_longest(offsets in prop::collection::vec(0i64..4, 1..40)) {
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut state = StreakState::default();
        for offset in offsets {
            day += Duration::days(offset);
            state = state.record_activity(day);
            prop_assert!(state.current >= 1);
            prop_assert!(state.current <= state.longest);
            prop_assert_eq!(state.last_date, Some(day));
        }
    }
}
