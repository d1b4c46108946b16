//! Holds traits and their implementation for Rust usage.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{
    Date, DateTime,
    math::gregorian,
    utility::{div, modulo},
};

/// Seconds in a civil day.
const DAY_SECS: u64 = 86400;

/// Convert a time difference in compare to the Unix Epoch to a Gregorian day.
///
/// Timezones are ignored, the base Epoch always assumes the same timezone as the given value
/// (UTC for [`SystemTime`]).
pub trait EpochDays {
    /// Whole days since 1970-01-01, negative before it (floored, so the day containing the instant).
    fn epoch_days(&self) -> i64;

    /// The proleptic Gregorian date of this instant.
    fn gregorian_date(&self) -> Date {
        gregorian::from_unix_days(self.epoch_days())
    }
}

impl EpochDays for Duration {
    fn epoch_days(&self) -> i64 {
        (self.as_secs() / DAY_SECS).min(i64::MAX as u64) as i64
    }
}

impl EpochDays for SystemTime {
    fn epoch_days(&self) -> i64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(d) => d.epoch_days(),
            // before the epoch; the partially elapsed day still counts as a whole one
            Err(e) => {
                let d = e.duration();
                let whole = d.epoch_days();
                if d.as_nanos() % (DAY_SECS as u128 * 1_000_000_000) == 0 {
                    -whole
                } else {
                    -whole - 1
                }
            }
        }
    }
}

/// Milliseconds in a civil day.
pub(crate) const DAY_MILLIS: i64 = DAY_SECS as i64 * 1000;

/// Signed milliseconds since 1970-01-01T00:00:00Z.
///
/// This is the timestamp every [`crate::CalendarAdapter`] time conversion works with.
pub trait EpochMillis {
    /// Milliseconds since the epoch, negative (and floored) before it.
    fn epoch_millis(&self) -> i64;
}

impl EpochMillis for Duration {
    fn epoch_millis(&self) -> i64 {
        self.as_millis().min(i64::MAX as u128) as i64
    }
}

impl EpochMillis for SystemTime {
    fn epoch_millis(&self) -> i64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(d) => d.epoch_millis(),
            Err(e) => {
                let d = e.duration();
                let whole = d.epoch_millis();
                if d.subsec_nanos() % 1_000_000 == 0 {
                    -whole
                } else {
                    -whole - 1
                }
            }
        }
    }
}

/// Split a timestamp into its UTC Gregorian date and time of day.
pub(crate) fn gregorian_date_time(millis: i64) -> DateTime {
    let rest = modulo(millis, DAY_MILLIS);
    DateTime {
        date: gregorian::from_unix_days(div(millis, DAY_MILLIS)),
        hour: (rest / 3_600_000) as u32,
        minute: (rest / 60_000 % 60) as u32,
        second: (rest / 1000 % 60) as u32,
        millisecond: (rest % 1000) as u32,
    }
}

/// Today's Gregorian date in UTC.
pub(crate) fn today_gregorian() -> Date {
    SystemTime::now().gregorian_date()
}
