//! Reference timezone rules
//!
//! The daily rollover happens at local midnight in a fixed zone. Offsets are derived
//! from the calendar rule, never from the host's timezone database.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

/// Maps UTC instants to a local calendar
pub trait ReferenceZone {
    /// UTC offset in effect at `instant`
    fn utc_offset(&self, instant: DateTime<Utc>) -> FixedOffset;

    /// Local calendar date at `instant`
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.utc_offset(instant)).date_naive()
    }
}

/// Build an offset from seconds east of UTC, clamping nonsense to UTC
fn offset_east(seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
}

/// A zone with no daylight saving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedZone(pub FixedOffset);

impl FixedZone {
    #[must_use]
    pub fn utc() -> Self {
        Self(Utc.fix())
    }
}

impl ReferenceZone for FixedZone {
    fn utc_offset(&self, _instant: DateTime<Utc>) -> FixedOffset {
        self.0
    }
}

/// EU summer-time rule
///
/// Summer time (standard + 1h) runs from 01:00 UTC on the last Sunday of March to
/// 01:00 UTC on the last Sunday of October. With a +01:00 standard offset this is
/// Central European Time, e.g. Europe/Amsterdam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuropeanSummerTime {
    standard_offset_seconds: i32,
}

impl EuropeanSummerTime {
    /// CET / CEST
    pub const CENTRAL: Self = Self::new(3600);

    #[must_use]
    pub const fn new(standard_offset_seconds: i32) -> Self {
        Self {
            standard_offset_seconds,
        }
    }

    /// Whether summer time is in effect at `instant`
    #[must_use]
    pub fn is_summer_time(&self, instant: DateTime<Utc>) -> bool {
        let year = instant.year();
        match (transition(year, 3), transition(year, 10)) {
            (Some(start), Some(end)) => start <= instant && instant < end,
            _ => false,
        }
    }
}

impl ReferenceZone for EuropeanSummerTime {
    fn utc_offset(&self, instant: DateTime<Utc>) -> FixedOffset {
        let shift = if self.is_summer_time(instant) { 3600 } else { 0 };
        offset_east(self.standard_offset_seconds + shift)
    }
}

/// 01:00 UTC on the last Sunday of `month`
fn transition(year: i32, month: u32) -> Option<DateTime<Utc>> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    let last_day = first_of_next.pred_opt()?;
    let back = u64::from(last_day.weekday().num_days_from_sunday());
    let sunday = last_day.checked_sub_days(Days::new(back))?;
    let one_am = NaiveTime::from_hms_opt(1, 0, 0)?;
    Some(sunday.and_time(one_am).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn at(text: &str) -> DateTime<Utc> {
        text.parse().unwrap()
    }

    #[test_case(2024, 3, "2024-03-31T01:00:00Z")]
    #[test_case(2024, 10, "2024-10-27T01:00:00Z")]
    #[test_case(2025, 3, "2025-03-30T01:00:00Z")]
    #[test_case(2025, 10, "2025-10-26T01:00:00Z")]
    #[test_case(2026, 3, "2026-03-29T01:00:00Z")]
    #[test_case(2026, 10, "2026-10-25T01:00:00Z")]
    fn transitions(year: i32, month: u32, expected: &str) {
        assert_eq!(transition(year, month), Some(at(expected)));
    }

    #[test_case("2025-01-15T12:00:00Z", 3600)]
    #[test_case("2025-03-30T00:59:59Z", 3600)]
    #[test_case("2025-03-30T01:00:00Z", 7200)]
    #[test_case("2025-07-01T12:00:00Z", 7200)]
    #[test_case("2025-10-26T00:59:59Z", 7200)]
    #[test_case("2025-10-26T01:00:00Z", 3600)]
    #[test_case("2025-12-31T23:00:00Z", 3600)]
    fn central_offsets(instant: &str, seconds: i32) {
        let offset = EuropeanSummerTime::CENTRAL.utc_offset(at(instant));
        assert_eq!(offset.local_minus_utc(), seconds);
    }

    #[test_case("2025-03-29T22:59:59Z", "2025-03-29")]
    #[test_case("2025-03-29T23:00:00Z", "2025-03-30")]
    #[test_case("2025-03-30T21:59:59Z", "2025-03-30")]
    #[test_case("2025-03-30T22:00:00Z", "2025-03-31")]
    #[test_case("2025-12-31T23:00:00Z", "2026-01-01")]
    fn central_local_dates(instant: &str, date: &str) {
        let expected: NaiveDate = date.parse().unwrap();
        assert_eq!(EuropeanSummerTime::CENTRAL.local_date(at(instant)), expected);
    }

    #[test]
    fn fixed_zone_ignores_season() {
        let zone = FixedZone::utc();
        assert_eq!(zone.utc_offset(at("2025-07-01T12:00:00Z")).local_minus_utc(), 0);
        assert_eq!(
            zone.local_date(at("2025-07-01T23:59:59Z")),
            "2025-07-01".parse::<NaiveDate>().unwrap()
        );
    }
}
