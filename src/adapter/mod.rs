//! The uniform per-calendar contract and its built-in implementations.
//!
//! Every calendar is reachable through [`CalendarAdapter`], so code that navigates or formats
//! dates never needs to know which calendar it is working with. Gregorian is the pivot of every
//! cross-calendar conversion, Jalaali is a second pivot every adapter must also speak.

mod chinese;
mod gregorian;
mod hijri;
mod jalaali;
mod table;

use core::fmt::{Display, Formatter};
use std::sync::Arc;

pub use chinese::ChineseAdapter;
pub use gregorian::GregorianAdapter;
pub use hijri::HijriAdapter;
pub use jalaali::JalaaliAdapter;
pub use table::{AdapterTable, TableAdapter};

use crate::{
    CalendarDate, Date, DateTime, Day, JalaaliDate, Month, RegistryError, Weekday, Year, math,
    traits::{DAY_MILLIS, EpochMillis, gregorian_date_time},
    utility::{div, format_iso, modulo, parse_ymd},
};

/// Which calendar system an adapter (or a tagged date) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Jalaali,
    Gregorian,
    Hijri,
    /// The approximate lunisolar calendar of [`math::chinese`].
    Chinese,
    /// A calendar registered at runtime, named by its type tag.
    Custom(&'static str),
}

impl CalendarKind {
    /// The canonical registry key of this calendar.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jalaali => "jalaali",
            Self::Gregorian => "gregorian",
            Self::Hijri => "hijri",
            Self::Chinese => "chinese",
            Self::Custom(name) => *name,
        }
    }
}

impl Display for CalendarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The operation set every calendar exposes.
///
/// Dates are plain `{year, month, day}` values of the implementing calendar. Alternative shapes
/// ([`JalaaliDate`], [`crate::GregorianDate`], [`crate::DateInput`]) convert into [`Date`] at the
/// call site.
///
/// Only the first seven methods are required, everything else has a default built on them which
/// pivots through Jalaali. Implementations are stateless, so they are expected to be cheap to share
/// across threads.
pub trait CalendarAdapter: Send + Sync {
    /// The type tag of this calendar.
    fn kind(&self) -> CalendarKind;

    /// Today (UTC) in this calendar.
    fn today(&self) -> Date;

    /// Days in the given month.
    fn month_length(&self, year: Year, month: Month) -> Day;

    /// Weekday of the date, derived from the Gregorian day it falls on (0 is Saturday).
    fn weekday(&self, year: Year, month: Month, day: Day) -> Weekday;

    /// Whether the year is a leap year of this calendar.
    fn is_leap_year(&self, year: Year) -> bool;

    /// Convert a Jalaali date into this calendar.
    fn from_jalaali(&self, date: JalaaliDate) -> Date;

    /// Convert a date of this calendar to Jalaali.
    fn to_jalaali(&self, date: Date) -> JalaaliDate;

    /// Convert a Gregorian date into this calendar.
    fn from_gregorian(&self, date: Date) -> Date {
        self.from_jalaali(math::jalaali::to_jalaali(date.year, date.month, date.day))
    }

    /// Convert a date of this calendar to Gregorian.
    fn to_gregorian(&self, date: Date) -> Date {
        let JalaaliDate { jy, jm, jd } = self.to_jalaali(date);
        math::jalaali::to_gregorian(jy, jm, jd).into()
    }

    /// Read `YYYY-MM-DD` (or with `/` and `.` separators). `None` when the text does not match.
    fn parse(&self, text: &str) -> Option<Date> {
        parse_ymd(text)
    }

    /// Zero padded `YYYY-MM-DD`.
    fn format(&self, date: Date) -> String {
        date.to_string()
    }

    /// Shift by `months`, keeping the day unless the destination month is shorter.
    fn add_months(&self, date: Date, months: i32) -> Date {
        let index = date.year as i64 * 12 + date.month as i64 - 1 + months as i64;
        let year = div(index, 12) as Year;
        let month = (modulo(index, 12) + 1) as Month;
        Date {
            year,
            month,
            day: date.day.min(self.month_length(year, month)),
        }
    }

    /// Shift by `years`, keeping the day unless the destination month is shorter.
    fn add_years(&self, date: Date, years: i32) -> Date {
        let year = date.year.saturating_add(years);
        Date {
            year,
            month: date.month,
            day: date.day.min(self.month_length(year, date.month)),
        }
    }

    /// Whether month and day are in range for this calendar.
    fn is_valid(&self, date: Date) -> bool {
        (1..=12).contains(&date.month)
            && date.day >= 1
            && date.day <= self.month_length(date.year, date.month)
    }

    /// The UTC date and time of a Unix timestamp in milliseconds, dated in this calendar.
    fn from_timestamp(&self, millis: i64) -> DateTime {
        let utc = gregorian_date_time(millis);
        DateTime {
            date: self.from_gregorian(utc.date),
            ..utc
        }
    }

    /// Unix timestamp in milliseconds of a date and UTC time of this calendar.
    fn to_timestamp(&self, value: DateTime) -> i64 {
        let days = math::gregorian::to_unix_days(self.to_gregorian(value.date));
        days.saturating_mul(DAY_MILLIS)
            .saturating_add(value.millis_of_day())
    }

    /// ISO 8601 text (Gregorian, UTC) of a date and time of this calendar.
    fn to_iso_string(&self, value: DateTime) -> String {
        format_iso(gregorian_date_time(self.to_timestamp(value)))
    }

    /// The current UTC date and time in this calendar.
    fn now(&self) -> DateTime {
        self.from_timestamp(std::time::SystemTime::now().epoch_millis())
    }

    /// Tag a date of this calendar.
    fn tag(&self, date: Date) -> CalendarDate {
        CalendarDate::new(self.kind(), date)
    }
}

/// Anything that can be registered as a calendar adapter.
///
/// Concrete adapters are always complete. [`AdapterTable`] is checked here, so registering a table
/// with missing operations fails before the registry is touched.
pub trait IntoCalendarAdapter {
    /// Validate and wrap the adapter that is about to be registered under `name`.
    fn into_adapter(self, name: &str) -> Result<Arc<dyn CalendarAdapter>, RegistryError>;
}

impl<A> IntoCalendarAdapter for A
where
    A: CalendarAdapter + 'static,
{
    fn into_adapter(self, _name: &str) -> Result<Arc<dyn CalendarAdapter>, RegistryError> {
        Ok(Arc::new(self))
    }
}

impl IntoCalendarAdapter for Arc<dyn CalendarAdapter> {
    fn into_adapter(self, _name: &str) -> Result<Arc<dyn CalendarAdapter>, RegistryError> {
        Ok(self)
    }
}

/// Weekday of a Gregorian date in the shared numbering.
pub(crate) fn gregorian_weekday(date: Date) -> Weekday {
    math::gregorian::weekday(date.year, date.month, date.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_registry_keys() {
        assert_eq!(CalendarKind::Jalaali.name(), "jalaali");
        assert_eq!(CalendarKind::Custom("julian").to_string(), "julian");
    }

    #[test]
    fn default_month_arithmetic_crosses_years() {
        let adapter = JalaaliAdapter;
        assert_eq!(
            adapter.add_months(Date::new(1403, 12, 30), 1),
            Date::new(1404, 1, 30)
        );
        assert_eq!(
            adapter.add_months(Date::new(1403, 1, 31), -1),
            Date::new(1402, 12, 29)
        );
        assert_eq!(
            adapter.add_months(Date::new(1403, 5, 10), -17),
            Date::new(1401, 12, 10)
        );
    }

    #[test]
    fn add_years_clamps_leap_day() {
        let adapter = JalaaliAdapter;
        assert_eq!(
            adapter.add_years(Date::new(1403, 12, 30), 1),
            Date::new(1404, 12, 29)
        );
        assert_eq!(
            adapter.add_years(Date::new(1403, 12, 30), 4),
            Date::new(1407, 12, 29)
        );
    }

    #[test]
    fn timestamps_keep_the_time_of_day() {
        let adapter = JalaaliAdapter;
        let t = adapter.from_timestamp(1_733_587_200_000);
        assert_eq!(t, DateTime::new(Date::new(1403, 9, 17), 16, 0, 0));

        let t = DateTime::new(Date::new(1403, 9, 17), 12, 30, 0);
        assert_eq!(adapter.to_timestamp(t), 1_733_574_600_000);
        assert_eq!(adapter.to_iso_string(t), "2024-12-07T12:30:00.000Z");
        assert_eq!(
            adapter.to_iso_string(Date::new(1403, 9, 17).into()),
            "2024-12-07T00:00:00.000Z"
        );
    }

    #[test]
    fn overflowing_time_carries_into_the_next_day() {
        let adapter = JalaaliAdapter;
        let t = DateTime::new(Date::new(1403, 12, 30), 24, 0, 0);
        assert_eq!(
            adapter.from_timestamp(adapter.to_timestamp(t)),
            DateTime::new(Date::new(1404, 1, 1), 0, 0, 0)
        );
    }

    #[test]
    fn validity_follows_month_length() {
        let adapter = JalaaliAdapter;
        assert!(adapter.is_valid(Date::new(1403, 12, 30)));
        assert!(!adapter.is_valid(Date::new(1402, 12, 30)));
        assert!(!adapter.is_valid(Date::new(1403, 13, 1)));
        assert!(!adapter.is_valid(Date::new(1403, 1, 0)));
    }
}
