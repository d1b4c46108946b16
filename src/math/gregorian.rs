//! Proleptic Gregorian calendar and the Julian Day Number pivot.

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    Date, Day, Month, Weekday, Year,
    utility::{div, modulo},
};

/// Julian Day Number of 1970-01-01.
pub const UNIX_EPOCH_JDN: i64 = 2440588;

/// Days in each month of a common year.
const MONTH_DAYS: [Day; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Carry months outside `1..=12` into the year.
pub(crate) const fn carry_month(year: i64, month: i64) -> (i64, i64) {
    (year + div(month - 1, 12), modulo(month - 1, 12) + 1)
}

/// Gregorian leap rule (every 4 years, except centuries not divisible by 400).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isLeapGregorianYear))]
#[cfg_attr(feature = "py", pyfunction(name = "is_leap_gregorian_year"))]
pub fn is_leap_year(year: Year) -> bool {
    let year = year as i64;
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in the given month (months outside `1..=12` are carried into the year).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianMonthLength))]
#[cfg_attr(feature = "py", pyfunction(name = "gregorian_month_length"))]
pub fn month_length(year: Year, month: Month) -> Day {
    let (year, month) = carry_month(year as i64, month as i64);
    if month == 2 && is_leap_year(year as Year) {
        29
    } else {
        MONTH_DAYS[(month - 1) as usize]
    }
}

/// Largest Julian Day Number magnitude the conversions work with, larger ones are clamped.
///
/// About three billion years either way, far outside any meaningful date while keeping every
/// intermediate value of the arithmetic inside `i64`.
pub const JDN_LIMIT: i64 = 1 << 40;

/// Integer Julian Day Number (noon based) of a proleptic Gregorian date.
pub fn to_jdn(year: Year, month: Month, day: Day) -> i64 {
    jdn_of(year as i64, month as i64, day as i64)
}

/// [`to_jdn`] on wide components.
pub(crate) const fn jdn_of(year: i64, month: i64, day: i64) -> i64 {
    let (y, m) = carry_month(year, month);
    let a = div(14 - m, 12);
    let y2 = y + 4800 - a;
    let m2 = m + 12 * a - 3;
    day + div(153 * m2 + 2, 5) + 365 * y2 + div(y2, 4) - div(y2, 100) + div(y2, 400) - 32045
}

/// Proleptic Gregorian date of an integer Julian Day Number (clamped to [`JDN_LIMIT`]).
pub fn from_jdn(jdn: i64) -> Date {
    let (year, month, day) = civil_of(jdn);
    Date {
        year: year as Year,
        month: month as Month,
        day: day as Day,
    }
}

/// [`from_jdn`] keeping the year wide.
pub(crate) const fn civil_of(jdn: i64) -> (i64, i64, i64) {
    let jdn = clamp_jdn(jdn);
    let f = jdn + 1401 + div(div(4 * jdn + 274277, 146097) * 3, 4) - 38;
    let e = 4 * f + 3;
    let g = div(modulo(e, 1461), 4);
    let h = 5 * g + 2;
    let day = div(modulo(h, 153), 5) + 1;
    let month = modulo(div(h, 153) + 2, 12) + 1;
    let year = div(e, 1461) - 4716 + div(12 + 2 - month, 12);
    (year, month, day)
}

/// Keep a day number inside `-JDN_LIMIT..=JDN_LIMIT`.
pub(crate) const fn clamp_jdn(jdn: i64) -> i64 {
    if jdn > JDN_LIMIT {
        JDN_LIMIT
    } else if jdn < -JDN_LIMIT {
        -JDN_LIMIT
    } else {
        jdn
    }
}

/// Integer day number of a real Julian Day (the civil day it falls in), clamped.
///
/// NaN maps to day 0.
pub(crate) fn jdn_of_jd(jd: f64) -> i64 {
    clamp_jdn((jd + 0.5).floor() as i64)
}

/// Julian Day of the civil midnight starting the given date (always ends in `.5`).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianToJd))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn gregorian_to_jd(year: Year, month: Month, day: Day) -> f64 {
    to_jdn(year, month, day) as f64 - 0.5
}

/// Gregorian date containing the given Julian Day.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jdToGregorian))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jd_to_gregorian(jd: f64) -> Date {
    from_jdn(jdn_of_jd(jd))
}

/// Weekday of the date (0 is Saturday).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianWeekday))]
#[cfg_attr(feature = "py", pyfunction(name = "gregorian_weekday"))]
pub fn weekday(year: Year, month: Month, day: Day) -> Weekday {
    weekday_of_jdn(to_jdn(year, month, day))
}

/// Weekday of an integer Julian Day Number (JDN 0 was a Monday).
pub const fn weekday_of_jdn(jdn: i64) -> Weekday {
    Weekday::from_index(jdn + 2)
}

/// Days since 1970-01-01 of the given date.
pub fn to_unix_days(date: Date) -> i64 {
    to_jdn(date.year, date.month, date.day) - UNIX_EPOCH_JDN
}

/// Date of the given count of days since 1970-01-01.
pub fn from_unix_days(days: i64) -> Date {
    from_jdn(days.saturating_add(UNIX_EPOCH_JDN))
}
