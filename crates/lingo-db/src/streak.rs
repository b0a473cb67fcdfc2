//! Consecutive-day study streak.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

/// Length of the run of consecutive calendar days ending at the latest date.
///
/// Duplicates and input order are ignored. The walk starts at the most recent
/// date present, not at today, so a streak does not decay while nobody studies.
#[must_use]
pub fn consecutive_days(dates: &[NaiveDate]) -> u32 {
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let Some(&latest) = days.last() else {
        return 0;
    };

    let mut streak = 0;
    let mut cursor = Some(latest);
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }
    streak
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(consecutive_days(&[]), 0);
    }

    #[rstest]
    #[case::single_day(vec![day(10)], 1)]
    #[case::gap_stops_walk(vec![day(10), day(9), day(8), day(6)], 3)]
    #[case::unordered_input(vec![day(6), day(8), day(10), day(9)], 3)]
    #[case::duplicates(vec![day(10), day(10), day(9)], 2)]
    #[case::gap_before_latest(vec![day(10), day(8), day(7), day(6)], 1)]
    fn counts_run_ending_at_latest_date(#[case] dates: Vec<NaiveDate>, #[case] expected: u32) {
        assert_eq!(consecutive_days(&dates), expected);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let dates = [
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 27).unwrap(),
        ];
        assert_eq!(consecutive_days(&dates), 3);
    }
}
