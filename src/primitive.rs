//! Holds the primitive aliases and the date shapes shared by every calendar.
//!
//! A date here is only a `(year, month, day)` triple. It means nothing without the calendar that
//! produced it, see [`CalendarDate`] for the tagged variant.

use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "py")]
use tarikh_proc::py_attr;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{CalendarKind, DateError, utility::format_ymd};

/// Counter for years (signed, so malformed input continues the arithmetic instead of wrapping).
pub type Year = i32;

/// Counter for months of a year, valid inputs are `1..=12`.
pub type Month = i32;

/// Counter for days of a month, valid inputs are `1..=31`.
pub type Day = i32;

/// Day of the week, numbered from Saturday (0) to Friday (6).
///
/// Every calendar shares this numbering. It is derived from the Gregorian day the date falls on,
/// so the same day has the same weekday regardless of the calendar it is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(eq, eq_int))]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// All days in order, starting from Saturday.
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Wrap any integer into a weekday (`7` is Saturday again, `-1` is Friday).
    pub const fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// The `0..=6` index of this day (0 is Saturday).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The `{year, month, day}` shape of a date.
///
/// Ordering is lexicographic which is only meaningful between dates of the same calendar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all, eq))]
pub struct Date {
    pub year: Year,
    pub month: Month,
    pub day: Day,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl Date {
    /// Create a date from its components (unchecked).
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }
}

impl Date {
    /// Return the components as a `(year, month, day)` tuple.
    pub const fn ymd(&self) -> (Year, Month, Day) {
        (self.year, self.month, self.day)
    }

    /// Is this date within `start..=end`.
    pub fn is_between(&self, start: &Self, end: &Self) -> bool {
        self >= start && self <= end
    }

    /// Is this date strictly after `start` and strictly before `end`.
    pub fn is_between_exclusive(&self, start: &Self, end: &Self) -> bool {
        self > start && self < end
    }
}

impl From<(Year, Month, Day)> for Date {
    fn from((year, month, day): (Year, Month, Day)) -> Self {
        Self { year, month, day }
    }
}

impl From<Date> for DateInput {
    fn from(value: Date) -> Self {
        Self {
            year: Some(value.year),
            month: Some(value.month),
            day: Some(value.day),
            ..Default::default()
        }
    }
}

impl TryFrom<DateInput> for Date {
    type Error = DateError;

    fn try_from(value: DateInput) -> Result<Self, Self::Error> {
        value.normalize()
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format_ymd(self.year, self.month, self.day))
    }
}

/// The `{jy, jm, jd}` shape, output of every `to_jalaali` conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all, eq))]
pub struct JalaaliDate {
    pub jy: Year,
    pub jm: Month,
    pub jd: Day,
}

date_shape! {
    ident: JalaaliDate,
    fields: (jy, jm, jd),
}

/// The `{gy, gm, gd}` shape, output of the raw Jalaali to Gregorian arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all, eq))]
pub struct GregorianDate {
    pub gy: Year,
    pub gm: Month,
    pub gd: Day,
}

date_shape! {
    ident: GregorianDate,
    fields: (gy, gm, gd),
}

/// A loosely shaped date as callers hand it over, with any of the known key sets.
///
/// Deserializes from `{"year", "month", "day"}`, `{"jy", "jm", "jd"}`, `{"gy", "gm", "gd"}` or a
/// mix of them. Normalize it into a [`Date`] before handing it to an adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<Month>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<Day>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jy: Option<Year>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jm: Option<Month>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd: Option<Day>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gy: Option<Year>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gm: Option<Month>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gd: Option<Day>,
}

impl DateInput {
    /// Pick the first present value of each component (`year`, then `jy`, then `gy`; likewise for
    /// month and day).
    pub fn normalize(&self) -> Result<Date, DateError> {
        let year = self
            .year
            .or(self.jy)
            .or(self.gy)
            .ok_or(DateError::MissingField { field: "year" })?;
        let month = self
            .month
            .or(self.jm)
            .or(self.gm)
            .ok_or(DateError::MissingField { field: "month" })?;
        let day = self
            .day
            .or(self.jd)
            .or(self.gd)
            .ok_or(DateError::MissingField { field: "day" })?;
        Ok(Date { year, month, day })
    }
}

/// A date tagged with the calendar it is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub calendar: CalendarKind,
    pub date: Date,
}

impl CalendarDate {
    /// Tag a date with its calendar.
    pub const fn new(calendar: CalendarKind, date: Date) -> Self {
        Self { calendar, date }
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.date, self.calendar)
    }
}

/// A date of some calendar with a UTC time of day.
///
/// Time components outside their ranges are not rejected, converting to a timestamp simply
/// carries them into the following days.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DateTime {
    pub date: Date,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(default)]
    pub millisecond: u32,
}

impl DateTime {
    /// A date at the given time, on the whole second.
    pub const fn new(date: Date, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            date,
            hour,
            minute,
            second,
            millisecond: 0,
        }
    }

    /// Milliseconds from the start of the day.
    pub const fn millis_of_day(&self) -> i64 {
        self.hour as i64 * 3_600_000
            + self.minute as i64 * 60_000
            + self.second as i64 * 1000
            + self.millisecond as i64
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self::new(date, 0, 0, 0)
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_wraps_both_directions() {
        assert_eq!(Weekday::from_index(0), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Saturday);
        assert_eq!(Weekday::from_index(-1), Weekday::Friday);
        assert_eq!(Weekday::Thursday.index(), 5);
    }

    #[test]
    fn jalaali_shape_round_trips_through_date() {
        let j = JalaaliDate {
            jy: 1403,
            jm: 9,
            jd: 17,
        };
        let d: Date = j.into();
        assert_eq!(d, Date::new(1403, 9, 17));
        assert_eq!(JalaaliDate::from(d), j);
    }

    #[test]
    fn normalize_prefers_year_month_day_keys() {
        let input = DateInput {
            year: Some(2024),
            jy: Some(1403),
            jm: Some(9),
            day: Some(7),
            jd: Some(17),
            ..Default::default()
        };
        assert_eq!(input.normalize(), Ok(Date::new(2024, 9, 7)));
    }

    #[test]
    fn normalize_reports_missing_component() {
        let input = DateInput {
            jy: Some(1403),
            jd: Some(17),
            ..Default::default()
        };
        assert_eq!(
            input.normalize(),
            Err(DateError::MissingField { field: "month" })
        );
    }

    #[test]
    fn date_orders_lexicographically() {
        let a = Date::new(1403, 1, 31);
        let b = Date::new(1403, 2, 1);
        let c = Date::new(1404, 1, 1);
        assert!(a < b && b < c);
        assert!(b.is_between(&a, &c));
        assert!(a.is_between(&a, &c));
        assert!(!a.is_between_exclusive(&a, &c));
    }

    #[test]
    fn time_of_day_in_millis() {
        let t = DateTime {
            millisecond: 250,
            ..DateTime::new(Date::new(1403, 9, 17), 12, 30, 5)
        };
        assert_eq!(t.millis_of_day(), 45_005_250);
        assert_eq!(t.to_string(), "1403-09-17 12:30:05");
        assert_eq!(DateTime::from(Date::new(1403, 9, 17)).millis_of_day(), 0);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(Date::new(1403, 1, 5).to_string(), "1403-01-05");
        assert_eq!(
            GregorianDate {
                gy: 2024,
                gm: 12,
                gd: 7
            }
            .to_string(),
            "2024-12-07"
        );
    }
}
