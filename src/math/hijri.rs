//! Tabular Islamic (Hijri, Qamari) calendar.
//!
//! Every conversion goes Hijri -> Julian Day -> Gregorian (and back), the Julian Day is never
//! skipped.

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    Date, Day, Month, Year,
    math::gregorian,
    utility::{div, modulo},
};

/// Julian Day of the civil midnight starting 1 Muharram 1 AH (16 July 622, Julian).
pub const EPOCH: f64 = 1948439.5;

/// Days in a 30 year cycle (19 common years of 354 days and 11 leap years of 355).
pub const CYCLE_DAYS: i64 = 10631;

/// Integer JDN (noon based) of [`EPOCH`].
const EPOCH_JDN: i64 = 1948440;

/// Leap years of the 30 year cycle: `(11y + 14) mod 30 < 11`.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isLeapHijriYear))]
#[cfg_attr(feature = "py", pyfunction(name = "is_leap_hijri_year"))]
pub fn is_leap_year(year: Year) -> bool {
    modulo(11 * year as i64 + 14, 30) < 11
}

/// Odd months have 30 days, even ones 29, except Dhu al-Hijjah (12) which has 30 in leap years.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = hijriMonthLength))]
#[cfg_attr(feature = "py", pyfunction(name = "hijri_month_length"))]
pub fn month_length(year: Year, month: Month) -> Day {
    if month == 12 && is_leap_year(year) {
        30
    } else if modulo(month as i64, 2) == 1 {
        30
    } else {
        29
    }
}

/// Julian Day of the civil midnight starting the given Hijri date.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = islamicToJd))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn islamic_to_jd(year: Year, month: Month, day: Day) -> f64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let jdn = div(11 * y + 3, 30) + 354 * y + 30 * m - div(m - 1, 2) + d + EPOCH_JDN - 385;
    jdn as f64 - 0.5
}

/// Hijri date containing the given Julian Day.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = jdToIslamic))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jd_to_islamic(jd: f64) -> Date {
    // day count since the epoch plus one full cycle so the first cycle is never negative
    let l = gregorian::jdn_of_jd(jd) - EPOCH_JDN + 1 + CYCLE_DAYS;
    let n = div(l - 1, CYCLE_DAYS);
    let l = l - CYCLE_DAYS * n + 354;
    let j = div(10985 - l, 5316) * div(50 * l, 17719) + div(l, 5670) * div(43 * l, 15238);
    let l = l - div(30 - j, 15) * div(17719 * j, 50) - div(j, 16) * div(15238 * j, 43) + 29;
    let month = div(24 * l, 709);
    let day = l - div(709 * month, 24);
    let year = 30 * n + j - 30;
    Date {
        year: year as Year,
        month: month as Month,
        day: day as Day,
    }
}

/// Convert a Gregorian date to Hijri (through the Julian Day).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianToHijri))]
#[cfg_attr(feature = "py", pyfunction(name = "gregorian_to_hijri"))]
pub fn from_gregorian(year: Year, month: Month, day: Day) -> Date {
    jd_to_islamic(gregorian::gregorian_to_jd(year, month, day))
}

/// Convert a Hijri date to Gregorian (through the Julian Day).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = hijriToGregorian))]
#[cfg_attr(feature = "py", pyfunction(name = "hijri_to_gregorian"))]
pub fn to_gregorian(year: Year, month: Month, day: Day) -> Date {
    gregorian::jd_to_gregorian(islamic_to_jd(year, month, day))
}
