//! Runtime assembled adapters.
//!
//! A calendar that is not compiled into the crate can still be registered by filling an
//! [`AdapterTable`] with plain functions. The table is checked when it is registered, an adapter
//! lacking any required operation never reaches the registry.

use std::sync::Arc;

use tracing::debug;

use super::{CalendarAdapter, CalendarKind, IntoCalendarAdapter};
use crate::{Date, Day, JalaaliDate, Month, RegistryError, Weekday, Year, math::jalaali};

/// A set of calendar operations given as function pointers.
///
/// The required fields mirror the required methods of [`CalendarAdapter`]. Optional ones fall back
/// to the default behavior of the trait when left empty.
#[derive(Debug, Clone, Copy)]
pub struct AdapterTable {
    pub tag: &'static str,
    pub today: Option<fn() -> Date>,
    pub month_length: Option<fn(Year, Month) -> Day>,
    pub weekday: Option<fn(Year, Month, Day) -> Weekday>,
    pub is_leap_year: Option<fn(Year) -> bool>,
    pub from_jalaali: Option<fn(JalaaliDate) -> Date>,
    pub to_jalaali: Option<fn(Date) -> JalaaliDate>,
    pub from_gregorian: Option<fn(Date) -> Date>,
    pub to_gregorian: Option<fn(Date) -> Date>,
    pub parse: Option<fn(&str) -> Option<Date>>,
    pub format: Option<fn(Date) -> String>,
}

impl AdapterTable {
    /// An empty table for the calendar tagged `tag`.
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            today: None,
            month_length: None,
            weekday: None,
            is_leap_year: None,
            from_jalaali: None,
            to_jalaali: None,
            from_gregorian: None,
            to_gregorian: None,
            parse: None,
            format: None,
        }
    }

    pub const fn today(mut self, f: fn() -> Date) -> Self {
        self.today = Some(f);
        self
    }

    pub const fn month_length(mut self, f: fn(Year, Month) -> Day) -> Self {
        self.month_length = Some(f);
        self
    }

    pub const fn weekday(mut self, f: fn(Year, Month, Day) -> Weekday) -> Self {
        self.weekday = Some(f);
        self
    }

    pub const fn is_leap_year(mut self, f: fn(Year) -> bool) -> Self {
        self.is_leap_year = Some(f);
        self
    }

    pub const fn from_jalaali(mut self, f: fn(JalaaliDate) -> Date) -> Self {
        self.from_jalaali = Some(f);
        self
    }

    pub const fn to_jalaali(mut self, f: fn(Date) -> JalaaliDate) -> Self {
        self.to_jalaali = Some(f);
        self
    }

    pub const fn from_gregorian(mut self, f: fn(Date) -> Date) -> Self {
        self.from_gregorian = Some(f);
        self
    }

    pub const fn to_gregorian(mut self, f: fn(Date) -> Date) -> Self {
        self.to_gregorian = Some(f);
        self
    }

    pub const fn parse(mut self, f: fn(&str) -> Option<Date>) -> Self {
        self.parse = Some(f);
        self
    }

    pub const fn format(mut self, f: fn(Date) -> String) -> Self {
        self.format = Some(f);
        self
    }

    /// Names of the required operations this table lacks, in contract order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("today", self.today.is_none()),
            ("month_length", self.month_length.is_none()),
            ("weekday", self.weekday.is_none()),
            ("is_leap_year", self.is_leap_year.is_none()),
            ("from_jalaali", self.from_jalaali.is_none()),
            ("to_jalaali", self.to_jalaali.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect()
    }

    /// Check the table, `name` is only used to describe the failure.
    pub fn validate(self, name: &str) -> Result<TableAdapter, RegistryError> {
        let (
            Some(today),
            Some(month_length),
            Some(weekday),
            Some(is_leap_year),
            Some(from_jalaali),
            Some(to_jalaali),
        ) = (
            self.today,
            self.month_length,
            self.weekday,
            self.is_leap_year,
            self.from_jalaali,
            self.to_jalaali,
        )
        else {
            return Err(RegistryError::MissingOperations {
                name: name.to_owned(),
                missing: self.missing(),
            });
        };

        Ok(TableAdapter {
            tag: self.tag,
            today,
            month_length,
            weekday,
            is_leap_year,
            from_jalaali,
            to_jalaali,
            from_gregorian: self.from_gregorian,
            to_gregorian: self.to_gregorian,
            parse: self.parse,
            format: self.format,
        })
    }
}

impl IntoCalendarAdapter for AdapterTable {
    fn into_adapter(self, name: &str) -> Result<Arc<dyn CalendarAdapter>, RegistryError> {
        let adapter = self.validate(name)?;
        debug!(name, tag = adapter.tag, "validated adapter table");
        Ok(Arc::new(adapter))
    }
}

/// A validated [`AdapterTable`].
#[derive(Debug, Clone, Copy)]
pub struct TableAdapter {
    tag: &'static str,
    today: fn() -> Date,
    month_length: fn(Year, Month) -> Day,
    weekday: fn(Year, Month, Day) -> Weekday,
    is_leap_year: fn(Year) -> bool,
    from_jalaali: fn(JalaaliDate) -> Date,
    to_jalaali: fn(Date) -> JalaaliDate,
    from_gregorian: Option<fn(Date) -> Date>,
    to_gregorian: Option<fn(Date) -> Date>,
    parse: Option<fn(&str) -> Option<Date>>,
    format: Option<fn(Date) -> String>,
}

impl CalendarAdapter for TableAdapter {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Custom(self.tag)
    }

    fn today(&self) -> Date {
        (self.today)()
    }

    fn month_length(&self, year: Year, month: Month) -> Day {
        (self.month_length)(year, month)
    }

    fn weekday(&self, year: Year, month: Month, day: Day) -> Weekday {
        (self.weekday)(year, month, day)
    }

    fn is_leap_year(&self, year: Year) -> bool {
        (self.is_leap_year)(year)
    }

    fn from_jalaali(&self, date: JalaaliDate) -> Date {
        (self.from_jalaali)(date)
    }

    fn to_jalaali(&self, date: Date) -> JalaaliDate {
        (self.to_jalaali)(date)
    }

    fn from_gregorian(&self, date: Date) -> Date {
        match self.from_gregorian {
            Some(f) => f(date),
            None => (self.from_jalaali)(jalaali::to_jalaali(date.year, date.month, date.day)),
        }
    }

    fn to_gregorian(&self, date: Date) -> Date {
        match self.to_gregorian {
            Some(f) => f(date),
            None => {
                let JalaaliDate { jy, jm, jd } = (self.to_jalaali)(date);
                jalaali::to_gregorian(jy, jm, jd).into()
            }
        }
    }

    fn parse(&self, text: &str) -> Option<Date> {
        match self.parse {
            Some(f) => f(text),
            None => crate::utility::parse_ymd(text),
        }
    }

    fn format(&self, date: Date) -> String {
        match self.format {
            Some(f) => f(date),
            None => date.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::gregorian;

    /// A Gregorian clone assembled from plain functions.
    fn gregorian_table() -> AdapterTable {
        AdapterTable::new("proleptic")
            .today(|| Date::new(2024, 12, 7))
            .month_length(gregorian::month_length)
            .weekday(gregorian::weekday)
            .is_leap_year(gregorian::is_leap_year)
            .from_jalaali(|j| jalaali::to_gregorian(j.jy, j.jm, j.jd).into())
            .to_jalaali(|d| jalaali::to_jalaali(d.year, d.month, d.day))
    }

    #[test]
    fn complete_table_validates() {
        let table = gregorian_table();
        assert!(table.missing().is_empty());
        let adapter = table.validate("proleptic").unwrap();
        assert_eq!(adapter.kind(), CalendarKind::Custom("proleptic"));
        assert_eq!(adapter.today(), Date::new(2024, 12, 7));
        assert!(adapter.is_leap_year(2024));
    }

    #[test]
    fn optional_operations_fall_back_to_the_jalaali_pivot() {
        let adapter = gregorian_table().validate("proleptic").unwrap();
        let date = Date::new(2024, 12, 7);
        assert_eq!(adapter.from_gregorian(date), date);
        assert_eq!(adapter.to_gregorian(date), date);
        assert_eq!(adapter.parse("2024/12/07"), Some(date));
        assert_eq!(adapter.format(date), "2024-12-07");
    }

    #[test]
    fn optional_operations_override() {
        let adapter = gregorian_table()
            .format(|d| format!("{}.{}.{}", d.day, d.month, d.year))
            .validate("proleptic")
            .unwrap();
        assert_eq!(adapter.format(Date::new(2024, 12, 7)), "7.12.2024");
    }

    #[test]
    fn missing_operations_are_listed_in_order() {
        let table = AdapterTable::new("broken")
            .today(Date::default)
            .month_length(gregorian::month_length);
        assert_eq!(
            table.missing(),
            vec!["weekday", "is_leap_year", "from_jalaali", "to_jalaali"]
        );
        let err = table.validate("broken").unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingOperations {
                name: "broken".into(),
                missing: vec!["weekday", "is_leap_year", "from_jalaali", "to_jalaali"],
            }
        );
    }
}
