//! Jalaali (Persian, Shamsi) calendar arithmetic.
//!
//! Both the leap rule and the conversions are driven by the historical break table: each year starts
//! on a Gregorian March day derived from the leap days counted through the table, and every
//! conversion goes through the Julian Day Number.

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    Day, GregorianDate, JalaaliDate, Month, Weekday, Year,
    math::gregorian,
    utility::{div, modulo},
};

/// Jalaali years at which the leap pattern of the 33 year cycle shifts.
///
/// Valid from -61 until (excluding) 3178; outside that the arithmetic continues without meaning.
pub const BREAKS: [Year; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394,
    2456, 3178,
];

/// End of the first half of the year (6 months of 31 days).
pub const FIRST_HALF_DAYS: i64 = 186;

/// Days of month in months up to and including the sixth.
pub const FIRST_HALF_MAX_DOM: Day = 31;

/// Days of month in the months after the sixth (except the last in a common year).
pub const SECOND_HALF_MAX_DOM: Day = 30;

/// Where a year sits in [`BREAKS`].
struct Interval {
    /// Break year opening the interval of the year.
    start: i64,
    /// Length of that interval in years.
    jump: i64,
    /// Leap days from the first break up to `start`.
    leaps_before: i64,
}

impl Interval {
    fn of(jy: i64) -> Self {
        let mut start = BREAKS[0] as i64;
        let mut jump = 0;
        let mut leaps_before = 0;
        for &next in &BREAKS[1..] {
            let next = next as i64;
            jump = next - start;
            if jy < next {
                break;
            }
            leaps_before += div(jump, 33) * 8 + div(modulo(jump, 33), 4);
            start = next;
        }
        Self {
            start,
            jump,
            leaps_before,
        }
    }
}

/// Gregorian day of March on which the Jalaali year `jy` starts (Gregorian year `jy + 621`).
fn march_day(jy: i64) -> i64 {
    let interval = Interval::of(jy);
    let n = jy - interval.start;
    let mut leaps = interval.leaps_before - 14 + div(n, 33) * 8 + div(modulo(n, 33) + 3, 4);
    if modulo(interval.jump, 33) == 4 && interval.jump - n == 4 {
        leaps += 1;
    }

    let gy = jy + 621;
    let gregorian_leaps = div(gy, 4) - div((div(gy, 100) + 1) * 3, 4) - 150;
    20 + leaps - gregorian_leaps
}

/// Julian Day Number of 1 Farvardin of `jy`.
fn year_start(jy: i64) -> i64 {
    gregorian::jdn_of(jy + 621, 3, march_day(jy))
}

/// Is this Jalaali year a leap year (Esfand has 30 days).
///
/// Finds the break interval holding the year, then reads the leap flag from the year's position
/// in the 33 year cycle of that interval. The last few years of an interval follow the cycle of
/// the next one. No year-by-year walk is needed.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isLeapJalaaliYear))]
#[cfg_attr(feature = "py", pyfunction(name = "is_leap_jalaali_year"))]
pub fn is_leap_year(jy: Year) -> bool {
    let interval = Interval::of(jy as i64);
    let mut n = jy as i64 - interval.start;
    if interval.jump - n < 6 {
        n = n - interval.jump + div(interval.jump + 4, 33) * 33;
    }

    modulo(modulo(n + 1, 33) - 1, 4) == 0
}

/// Days in the given Jalaali month (31 for the first half, 30 after and 29/30 for Esfand).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jalaaliMonthLength))]
#[cfg_attr(feature = "py", pyfunction(name = "jalaali_month_length"))]
pub fn month_length(jy: Year, jm: Month) -> Day {
    if jm <= 6 {
        FIRST_HALF_MAX_DOM
    } else if jm <= 11 {
        SECOND_HALF_MAX_DOM
    } else if is_leap_year(jy) {
        30
    } else {
        29
    }
}

/// Julian Day Number of a Jalaali date.
///
/// Months and days outside their ranges continue the count, every month after the seventh
/// counting 30 days.
pub fn to_jdn(jy: Year, jm: Month, jd: Day) -> i64 {
    let (jm, jd) = (jm as i64, jd as i64);
    let before_month = if jm <= 7 {
        (jm - 1) * 31
    } else {
        FIRST_HALF_DAYS + (jm - 7) * 30
    };
    year_start(jy as i64) + before_month + jd - 1
}

/// Jalaali date of a Julian Day Number (clamped like [`gregorian::from_jdn`]).
pub fn from_jdn(jdn: i64) -> JalaaliDate {
    let jdn = gregorian::clamp_jdn(jdn);
    let (gy, _, _) = gregorian::civil_of(jdn);
    let mut jy = gy - 621;
    let mut start = year_start(jy);
    if jdn < start {
        jy -= 1;
        start = year_start(jy);
    }

    let k = jdn - start;
    let (jm, jd) = if k < FIRST_HALF_DAYS {
        (1 + div(k, 31), 1 + modulo(k, 31))
    } else {
        (
            7 + div(k - FIRST_HALF_DAYS, 30),
            1 + modulo(k - FIRST_HALF_DAYS, 30),
        )
    };

    JalaaliDate {
        jy: jy as Year,
        jm: jm as Month,
        jd: jd as Day,
    }
}

/// Convert a Gregorian date to Jalaali.
///
/// ```
/// let j = tarikh::math::jalaali::to_jalaali(2024, 12, 7);
/// assert_eq!((j.jy, j.jm, j.jd), (1403, 9, 17));
/// ```
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = toJalaali))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn to_jalaali(gy: Year, gm: Month, gd: Day) -> JalaaliDate {
    from_jdn(gregorian::to_jdn(gy, gm, gd))
}

/// Convert a Jalaali date to Gregorian.
///
/// ```
/// let g = tarikh::math::jalaali::to_gregorian(1403, 9, 17);
/// assert_eq!((g.gy, g.gm, g.gd), (2024, 12, 7));
/// ```
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jalaaliToGregorian))]
#[cfg_attr(feature = "py", pyfunction(name = "jalaali_to_gregorian"))]
pub fn to_gregorian(jy: Year, jm: Month, jd: Day) -> GregorianDate {
    gregorian::from_jdn(to_jdn(jy, jm, jd)).into()
}

/// Weekday of a Jalaali date (0 is Saturday, the first day of the Persian week).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jalaaliWeekday))]
#[cfg_attr(feature = "py", pyfunction(name = "jalaali_weekday"))]
pub fn weekday(jy: Year, jm: Month, jd: Day) -> Weekday {
    let g = to_gregorian(jy, jm, jd);
    gregorian::weekday(g.gy, g.gm, g.gd)
}
