//! The Gregorian adapter, the pivot of every cross-calendar conversion.

use super::{CalendarAdapter, CalendarKind, gregorian_weekday};
use crate::{
    Date, Day, JalaaliDate, Month, Weekday, Year,
    math::{gregorian, jalaali},
    traits::today_gregorian,
};

/// Proleptic Gregorian calendar (Miladi).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianAdapter;

impl CalendarAdapter for GregorianAdapter {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Gregorian
    }

    fn today(&self) -> Date {
        today_gregorian()
    }

    fn month_length(&self, year: Year, month: Month) -> Day {
        gregorian::month_length(year, month)
    }

    fn weekday(&self, year: Year, month: Month, day: Day) -> Weekday {
        gregorian_weekday(Date { year, month, day })
    }

    fn is_leap_year(&self, year: Year) -> bool {
        gregorian::is_leap_year(year)
    }

    fn from_jalaali(&self, date: JalaaliDate) -> Date {
        jalaali::to_gregorian(date.jy, date.jm, date.jd).into()
    }

    fn to_jalaali(&self, date: Date) -> JalaaliDate {
        jalaali::to_jalaali(date.year, date.month, date.day)
    }

    fn from_gregorian(&self, date: Date) -> Date {
        date
    }

    fn to_gregorian(&self, date: Date) -> Date {
        date
    }
}
