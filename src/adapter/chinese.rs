//! The approximate Chinese lunisolar adapter.
//!
//! See [`crate::math::chinese`] for the accuracy limits, this adapter does not hide them.

use super::{CalendarAdapter, CalendarKind, gregorian_weekday};
use crate::{
    Date, Day, JalaaliDate, Month, Weekday, Year,
    math::{chinese, jalaali},
    traits::today_gregorian,
};

/// Mean synodic month approximation of the Chinese calendar.
///
/// It has no leap years and no leap months; [`CalendarAdapter::format`] still appends ` (leap)`
/// for months the approximation flags, which it currently never does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChineseAdapter;

impl CalendarAdapter for ChineseAdapter {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Chinese
    }

    fn today(&self) -> Date {
        self.from_gregorian(today_gregorian())
    }

    fn month_length(&self, year: Year, month: Month) -> Day {
        chinese::month_length(year, month)
    }

    fn weekday(&self, year: Year, month: Month, day: Day) -> Weekday {
        gregorian_weekday(chinese::to_gregorian(year, month, day))
    }

    fn is_leap_year(&self, year: Year) -> bool {
        chinese::is_leap_year(year)
    }

    fn from_jalaali(&self, date: JalaaliDate) -> Date {
        let g = jalaali::to_gregorian(date.jy, date.jm, date.jd);
        chinese::from_gregorian(g.gy, g.gm, g.gd).date
    }

    fn to_jalaali(&self, date: Date) -> JalaaliDate {
        let g = chinese::to_gregorian(date.year, date.month, date.day);
        jalaali::to_jalaali(g.year, g.month, g.day)
    }

    fn from_gregorian(&self, date: Date) -> Date {
        chinese::from_gregorian(date.year, date.month, date.day).date
    }

    fn to_gregorian(&self, date: Date) -> Date {
        chinese::to_gregorian(date.year, date.month, date.day)
    }

    fn format(&self, date: Date) -> String {
        if chinese::is_leap_month(date.year, date.month) {
            format!("{date} (leap)")
        } else {
            date.to_string()
        }
    }
}
