//! Miscellaneous generic utilities.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Date, DateTime, Day, Month, Year};

/// Accepted textual date layout, separators may be `-`, `/` or `.` (mixing is allowed).
static YMD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})$")
        .unwrap_or_else(|e| panic!("date pattern does not compile: {e}"))
});

/// Floor division (`Math.floor(a / b)` semantics for a positive `b`).
pub(crate) const fn div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// Floor modulo, the result has the sign of a positive `b`.
pub(crate) const fn modulo(a: i64, b: i64) -> i64 {
    a.rem_euclid(b)
}

/// Parse `YYYY-MM-DD`, `YYYY/MM/DD` or `YYYY.MM.DD` without checking the ranges.
pub fn parse_ymd(text: &str) -> Option<Date> {
    let captures = YMD_PATTERN.captures(text)?;
    let year = captures.get(1)?.as_str().parse::<Year>().ok()?;
    let month = captures.get(2)?.as_str().parse::<Month>().ok()?;
    let day = captures.get(3)?.as_str().parse::<Day>().ok()?;
    Some(Date { year, month, day })
}

/// Zero padded `YYYY-MM-DD`.
pub fn format_ymd(year: Year, month: Month, day: Day) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// ISO 8601 UTC text of a Gregorian date and time, `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Years outside `0..=9999` use the signed six digit form (`+012345`, `-000001`).
pub fn format_iso(value: DateTime) -> String {
    let Date { year, month, day } = value.date;
    let year = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+07}")
    };
    format!(
        "{year}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}Z",
        value.hour, value.minute, value.second, value.millisecond
    )
}
