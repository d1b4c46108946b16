//! Approximate Chinese lunisolar calendar.
//!
//! This is NOT an astronomical calendar. Months are counted as whole mean synodic months from a
//! single reference new moon, there are no true new moon computations, no solar terms and no leap
//! month insertion. Twelve months always make a year, so the year number drifts away from the real
//! Chinese year by about 11 days a year. Treat its output as a rough lunar phase based date.

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    Date, Day, Month, Year,
    math::gregorian,
    utility::{div, modulo},
};

/// Mean interval between new moons, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Reference new moon (2000-01-06 18:14 UTC) in days since the Unix epoch.
pub const REFERENCE_NEW_MOON: f64 = 10962.0 + (18.0 * 60.0 + 14.0) / 1440.0;

/// The year in which the month of [`REFERENCE_NEW_MOON`] is the first month.
pub const REFERENCE_YEAR: Year = 2000;

/// Days in a lunar month of the approximation.
pub const MAX_DAY: Day = 30;

/// A date of the approximation, with the flag that a real lunisolar calendar would carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub date: Date,
    /// Whether the month is an intercalary month (always `false` here).
    pub leap_month: bool,
}

/// Civil day (days since the Unix epoch) containing the approximate new moon of month `index`.
fn month_start(index: i64) -> i64 {
    (REFERENCE_NEW_MOON + index as f64 * SYNODIC_MONTH).floor() as i64
}

/// Month index (0 is the reference month) of the given month.
fn month_index(year: Year, month: Month) -> i64 {
    (year as i64 - REFERENCE_YEAR as i64) * 12 + month as i64 - 1
}

/// The approximation has no intercalary months.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isLeapChineseMonth))]
#[cfg_attr(feature = "py", pyfunction(name = "is_leap_chinese_month"))]
pub fn is_leap_month(_year: Year, _month: Month) -> bool {
    false
}

/// The approximation has no leap years either.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isLeapChineseYear))]
#[cfg_attr(feature = "py", pyfunction(name = "is_leap_chinese_year"))]
pub fn is_leap_year(_year: Year) -> bool {
    false
}

/// Nominal month length: odd months 30 days, even ones 29.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = chineseMonthLength))]
#[cfg_attr(feature = "py", pyfunction(name = "chinese_month_length"))]
pub fn month_length(_year: Year, month: Month) -> Day {
    if modulo(month as i64, 2) == 1 { 30 } else { 29 }
}

/// Convert a Gregorian date to the lunar approximation.
///
/// The month index is `floor(elapsed / SYNODIC_MONTH)` where `elapsed` runs from the reference
/// new moon to the end of the given day, so the day containing a new moon is the first day of
/// its month. The day is clamped to `1..=30`.
pub fn from_gregorian(year: Year, month: Month, day: Day) -> LunarDate {
    let days = gregorian::to_unix_days(Date { year, month, day });
    let elapsed = (days + 1) as f64 - REFERENCE_NEW_MOON;
    let mut index = (elapsed / SYNODIC_MONTH).floor() as i64;
    // float rounding can put an exact boundary on the wrong side
    if month_start(index) > days {
        index -= 1;
    } else if month_start(index + 1) <= days {
        index += 1;
    }

    let lunar_day = (days - month_start(index) + 1).clamp(1, MAX_DAY as i64);
    let year = REFERENCE_YEAR as i64 + div(index, 12);
    let month = modulo(index, 12) + 1;

    LunarDate {
        date: Date {
            year: year as Year,
            month: month as Month,
            day: lunar_day as Day,
        },
        leap_month: is_leap_month(year as Year, month as Month),
    }
}

/// Convert a date of the lunar approximation to Gregorian.
///
/// Day `n` of a month is `n - 1` days after the day containing its approximate new moon.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = chineseToGregorian))]
#[cfg_attr(feature = "py", pyfunction(name = "chinese_to_gregorian"))]
pub fn to_gregorian(year: Year, month: Month, day: Day) -> Date {
    gregorian::from_unix_days(month_start(month_index(year, month)) + day as i64 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_month_starts_on_the_new_moon_day() {
        assert_eq!(from_gregorian(2000, 1, 6).date, Date::new(2000, 1, 1));
        assert_eq!(from_gregorian(2000, 1, 5).date, Date::new(1999, 12, 29));
        assert_eq!(to_gregorian(2000, 1, 1), Date::new(2000, 1, 6));
        assert_eq!(to_gregorian(2000, 2, 1), Date::new(2000, 2, 5));
    }

    #[test]
    fn known_drifted_date() {
        // twelve months a year, so by late 2024 the year number is already ahead
        let lunar = from_gregorian(2024, 12, 7);
        assert_eq!(lunar.date, Date::new(2025, 9, 7));
        assert!(!lunar.leap_month);
    }

    #[test]
    fn round_trips_with_days_in_range() {
        let start = gregorian::to_jdn(1950, 1, 1);
        for jdn in start..start + 365 * 100 {
            let g = gregorian::from_jdn(jdn);
            let lunar = from_gregorian(g.year, g.month, g.day);
            assert!((1..=MAX_DAY).contains(&lunar.date.day));
            let Date { year, month, day } = lunar.date;
            assert_eq!(to_gregorian(year, month, day), g, "through {}", lunar.date);
        }
    }

    #[test]
    fn nominal_lengths_and_no_leaps() {
        assert_eq!(month_length(2024, 1), 30);
        assert_eq!(month_length(2024, 2), 29);
        assert!(!is_leap_year(2023));
        assert!(!is_leap_month(2023, 2));
    }
}
