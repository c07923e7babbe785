//! Puzzle numbering and rollover

use super::zone::{EuropeanSummerTime, ReferenceZone};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Source of "now"
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Maps instants to puzzle numbers: the launch date is puzzle 1, and the number
/// goes up by one at every local midnight in the reference zone
#[derive(Debug, Clone)]
pub struct DailySeedClock<Z = EuropeanSummerTime, C = SystemClock> {
    zone: Z,
    clock: C,
    launch_date: NaiveDate,
}

impl DailySeedClock {
    /// Central European time on the system clock
    #[must_use]
    pub const fn central_european(launch_date: NaiveDate) -> Self {
        Self::new(EuropeanSummerTime::CENTRAL, SystemClock, launch_date)
    }
}

impl<Z: ReferenceZone, C: Clock> DailySeedClock<Z, C> {
    #[must_use]
    pub const fn new(zone: Z, clock: C, launch_date: NaiveDate) -> Self {
        Self {
            zone,
            clock,
            launch_date,
        }
    }

    #[must_use]
    pub const fn launch_date(&self) -> NaiveDate {
        self.launch_date
    }

    /// Puzzle number for a given instant; never below 1
    #[must_use]
    pub fn puzzle_number_at(&self, instant: DateTime<Utc>) -> u32 {
        let local = self.zone.local_date(instant);
        let days = (local - self.launch_date).num_days() + 1;
        u32::try_from(days.max(1)).unwrap_or(u32::MAX)
    }

    /// Today's puzzle number
    #[must_use]
    pub fn current_puzzle_number(&self) -> u32 {
        self.puzzle_number_at(self.clock.now())
    }

    /// Local calendar date a puzzle number belongs to
    #[must_use]
    pub fn date_of(&self, puzzle_number: u32) -> Option<NaiveDate> {
        let offset = u64::from(puzzle_number.checked_sub(1)?);
        self.launch_date.checked_add_days(Days::new(offset))
    }

    /// First instant after `instant` at which the puzzle number changes
    ///
    /// Takes the UTC midnight of the next local date and subtracts the offset in
    /// effect then, so DST changes shift the rollover by an hour as they should.
    #[must_use]
    pub fn next_rollover_at(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let today = self.zone.local_date(instant);
        let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
        let midnight_utc = tomorrow.and_time(NaiveTime::MIN).and_utc();
        let offset = self.zone.utc_offset(midnight_utc);
        midnight_utc - TimeDelta::seconds(i64::from(offset.local_minus_utc()))
    }

    /// Instant of the next rollover
    #[must_use]
    pub fn next_rollover_instant(&self) -> DateTime<Utc> {
        self.next_rollover_at(self.clock.now())
    }

    /// Time left until the next rollover
    #[must_use]
    pub fn time_until_rollover(&self) -> TimeDelta {
        let now = self.clock.now();
        self.next_rollover_at(now) - now
    }
}
