//! The tabular Hijri adapter.

use super::{CalendarAdapter, CalendarKind, gregorian_weekday};
use crate::{
    Date, Day, JalaaliDate, Month, Weekday, Year,
    math::{hijri, jalaali},
    traits::today_gregorian,
};

/// Tabular Islamic calendar (Qamari), converted through the Julian Day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HijriAdapter;

impl CalendarAdapter for HijriAdapter {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Hijri
    }

    fn today(&self) -> Date {
        self.from_gregorian(today_gregorian())
    }

    fn month_length(&self, year: Year, month: Month) -> Day {
        hijri::month_length(year, month)
    }

    fn weekday(&self, year: Year, month: Month, day: Day) -> Weekday {
        gregorian_weekday(hijri::to_gregorian(year, month, day))
    }

    fn is_leap_year(&self, year: Year) -> bool {
        hijri::is_leap_year(year)
    }

    fn from_jalaali(&self, date: JalaaliDate) -> Date {
        let g = jalaali::to_gregorian(date.jy, date.jm, date.jd);
        hijri::from_gregorian(g.gy, g.gm, g.gd)
    }

    fn to_jalaali(&self, date: Date) -> JalaaliDate {
        let g = hijri::to_gregorian(date.year, date.month, date.day);
        jalaali::to_jalaali(g.year, g.month, g.day)
    }

    fn from_gregorian(&self, date: Date) -> Date {
        hijri::from_gregorian(date.year, date.month, date.day)
    }

    fn to_gregorian(&self, date: Date) -> Date {
        hijri::to_gregorian(date.year, date.month, date.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jalaali_goes_through_gregorian() {
        let adapter = HijriAdapter;
        let j = JalaaliDate {
            jy: 1403,
            jm: 9,
            jd: 17,
        };
        assert_eq!(adapter.from_jalaali(j), Date::new(1446, 6, 5));
        assert_eq!(adapter.to_jalaali(Date::new(1446, 6, 5)), j);
    }

    #[test]
    fn last_month_clamps_in_common_years() {
        let adapter = HijriAdapter;
        // 1445 is leap, 1446 is not
        assert_eq!(
            adapter.add_years(Date::new(1445, 12, 30), 1),
            Date::new(1446, 12, 29)
        );
        assert_eq!(
            adapter.add_months(Date::new(1446, 1, 30), 1),
            Date::new(1446, 2, 29)
        );
    }
}
