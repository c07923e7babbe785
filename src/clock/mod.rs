//! Daily puzzle clock
//!
//! Turns wall-clock time into the puzzle number, using an explicit reference
//! timezone rule set and an injectable clock so tests can pin any instant.

mod daily;
mod zone;

pub use daily::{Clock, DailySeedClock, FixedClock, SystemClock};
pub use zone::{EuropeanSummerTime, FixedZone, ReferenceZone};
