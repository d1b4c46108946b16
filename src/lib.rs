#![doc = include_str!("../README.md")]
#![cfg_attr(feature = "py", allow(unsafe_op_in_unsafe_fn))] // pyo3 generated constructors

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[macro_use]
mod r#macro;

pub mod adapter;
pub mod error;
pub mod math;
pub mod primitive;
pub mod registry;
pub mod traits;
pub mod utility;

pub use adapter::{
    AdapterTable, CalendarAdapter, CalendarKind, ChineseAdapter, GregorianAdapter, HijriAdapter,
    IntoCalendarAdapter, JalaaliAdapter, TableAdapter,
};
pub use error::{DateError, RegistryError};
pub use primitive::{
    CalendarDate, Date, DateInput, DateTime, Day, GregorianDate, JalaaliDate, Month, Weekday, Year,
};
pub use registry::Registry;
pub use traits::{EpochDays, EpochMillis};

#[cfg(feature = "py")]
#[pymodule]
fn tarikh(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use math::{chinese, gregorian, hijri, jalaali};

    m.add_function(wrap_pyfunction!(jalaali::is_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(jalaali::month_length, m)?)?;
    m.add_function(wrap_pyfunction!(jalaali::to_jalaali, m)?)?;
    m.add_function(wrap_pyfunction!(jalaali::to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(jalaali::weekday, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian::is_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian::month_length, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian::gregorian_to_jd, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian::jd_to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian::weekday, m)?)?;
    m.add_function(wrap_pyfunction!(hijri::is_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(hijri::month_length, m)?)?;
    m.add_function(wrap_pyfunction!(hijri::islamic_to_jd, m)?)?;
    m.add_function(wrap_pyfunction!(hijri::jd_to_islamic, m)?)?;
    m.add_function(wrap_pyfunction!(hijri::from_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(hijri::to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(chinese::is_leap_month, m)?)?;
    m.add_function(wrap_pyfunction!(chinese::is_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(chinese::month_length, m)?)?;
    m.add_function(wrap_pyfunction!(chinese::to_gregorian, m)?)?;
    m.add_class::<Date>()?;
    m.add_class::<JalaaliDate>()?;
    m.add_class::<GregorianDate>()?;
    m.add_class::<Weekday>()?;
    Ok(())
}
