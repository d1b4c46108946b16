//! The Jalaali adapter, default calendar of the registry.

use super::{CalendarAdapter, CalendarKind};
use crate::{Date, Day, JalaaliDate, Month, Weekday, Year, math::jalaali, traits::today_gregorian};

/// Iranian solar calendar (Shamsi).
///
/// Jalaali is its own secondary pivot, so both Jalaali conversions are identities here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JalaaliAdapter;

impl CalendarAdapter for JalaaliAdapter {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Jalaali
    }

    fn today(&self) -> Date {
        self.from_gregorian(today_gregorian())
    }

    fn month_length(&self, year: Year, month: Month) -> Day {
        jalaali::month_length(year, month)
    }

    fn weekday(&self, year: Year, month: Month, day: Day) -> Weekday {
        jalaali::weekday(year, month, day)
    }

    fn is_leap_year(&self, year: Year) -> bool {
        jalaali::is_leap_year(year)
    }

    fn from_jalaali(&self, date: JalaaliDate) -> Date {
        date.into()
    }

    fn to_jalaali(&self, date: Date) -> JalaaliDate {
        date.into()
    }

    fn from_gregorian(&self, date: Date) -> Date {
        jalaali::to_jalaali(date.year, date.month, date.day).into()
    }

    fn to_gregorian(&self, date: Date) -> Date {
        jalaali::to_gregorian(date.year, date.month, date.day).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_arithmetic_clamps_to_destination() {
        let adapter = JalaaliAdapter;
        assert_eq!(
            adapter.add_months(Date::new(1403, 1, 31), 1),
            Date::new(1403, 2, 31)
        );
        assert_eq!(
            adapter.add_months(Date::new(1403, 6, 31), 1),
            Date::new(1403, 7, 30)
        );
    }

    #[test]
    fn gregorian_pivot() {
        let adapter = JalaaliAdapter;
        assert_eq!(
            adapter.from_gregorian(Date::new(2024, 12, 7)),
            Date::new(1403, 9, 17)
        );
        assert_eq!(
            adapter.to_gregorian(Date::new(1403, 9, 17)),
            Date::new(2024, 12, 7)
        );
    }

    #[test]
    fn today_agrees_with_the_gregorian_clock() {
        let adapter = JalaaliAdapter;
        let before = today_gregorian();
        let today = adapter.today();
        assert!(adapter.is_valid(today));
        let back = adapter.to_gregorian(today);
        assert!(back == before || back == today_gregorian());
    }
}
