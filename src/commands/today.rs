//! Today command
//!
//! Reports which puzzle is live and when the next one unlocks.

use crate::clock::{Clock, DailySeedClock, ReferenceZone};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Snapshot of the daily schedule at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub puzzle_number: u32,
    pub date: Option<NaiveDate>,
    pub next_rollover: DateTime<Utc>,
    pub time_remaining: TimeDelta,
}

/// Read the current puzzle number and rollover from a seed clock
#[must_use]
pub fn today_info<Z: ReferenceZone, C: Clock>(clock: &DailySeedClock<Z, C>) -> TodayInfo {
    let puzzle_number = clock.current_puzzle_number();

    TodayInfo {
        puzzle_number,
        date: clock.date_of(puzzle_number),
        next_rollover: clock.next_rollover_instant(),
        time_remaining: clock.time_until_rollover(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{EuropeanSummerTime, FixedClock};
    use chrono::TimeZone;

    fn info_at(instant: DateTime<Utc>) -> TodayInfo {
        let launch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let clock = DailySeedClock::new(EuropeanSummerTime::CENTRAL, FixedClock(instant), launch);
        today_info(&clock)
    }

    #[test]
    fn launch_day_is_puzzle_one() {
        let info = info_at(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());

        assert_eq!(info.puzzle_number, 1);
        assert_eq!(info.date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(
            info.next_rollover,
            Utc.with_ymd_and_hms(2025, 1, 1, 23, 0, 0).unwrap()
        );
        assert_eq!(info.time_remaining, TimeDelta::hours(11));
    }

    #[test]
    fn late_evening_utc_is_already_tomorrow() {
        // 23:30 UTC is 00:30 in Central Europe
        let info = info_at(Utc.with_ymd_and_hms(2025, 1, 1, 23, 30, 0).unwrap());

        assert_eq!(info.puzzle_number, 2);
        assert_eq!(info.date, NaiveDate::from_ymd_opt(2025, 1, 2));
        assert_eq!(info.time_remaining, TimeDelta::minutes(23 * 60 + 30));
    }

    #[test]
    fn summer_rollover_is_at_2200_utc() {
        let info = info_at(Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap());

        assert_eq!(
            info.next_rollover,
            Utc.with_ymd_and_hms(2025, 7, 1, 22, 0, 0).unwrap()
        );
    }
}
