//! Pure conversion arithmetic of every supported calendar.
//!
//! Nothing here validates its input, out of range months and days simply continue the
//! arithmetic. Calling code should go through [`crate::adapter`] instead of these functions.

pub mod chinese;
pub mod gregorian;
pub mod hijri;
pub mod jalaali;
