use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Consecutive-day logging streak. Persisted by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StreakState {
    pub current: u32,
    pub longest: u32,
    pub last_date: Option<NaiveDate>,
}

impl StreakState {
    /// State after logging activity on `today`.
    ///
    /// A second entry on the same day changes nothing, the day after
    /// `last_date` extends the streak, and any other day restarts it at 1.
    pub fn record_activity(&self, today: NaiveDate) -> Self {
        let current = match self.last_date {
            Some(last) if last == today => return *self,
            Some(last) if last.succ_opt() == Some(today) => self.current.saturating_add(1),
            _ => 1,
        };
        Self {
            current,
            longest: self.longest.max(current),
            last_date: Some(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn first_activity_starts_at_one() {
        let s = StreakState::default().record_activity(day(1));
        assert_eq!(s.current, 1);
        assert_eq!(s.longest, 1);
        assert_eq!(s.last_date, Some(day(1)));
    }

    #[test]
    fn same_day_is_idempotent() {
        let s = StreakState::default().record_activity(day(1));
        assert_eq!(s.record_activity(day(1)), s);
    }

    #[test]
    fn consecutive_days_extend_and_gaps_reset() {
        let s = StreakState::default()
            .record_activity(day(1))
            .record_activity(day(2))
            .record_activity(day(3));
        assert_eq!(s.current, 3);

        let s = s.record_activity(day(5));
        assert_eq!(s.current, 1);
        assert_eq!(s.longest, 3);
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let may_31 = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let s = StreakState::default()
            .record_activity(may_31)
            .record_activity(day(1));
        assert_eq!(s.current, 2);
    }
}
