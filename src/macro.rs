//! Private macros specific to this crate.

/// Implement the conversions of an alternative key shape (like `{jy, jm, jd}`) to and from
/// [`crate::Date`].
///
/// The shape is assumed to be a plain struct of three public fields holding year, month and day in
/// that order. All conversions are lossless, the only thing that changes is the naming.
macro_rules! date_shape {
    (
        ident: $ident:ident,
        fields: ($y:ident, $m:ident, $d:ident),
    ) => {
        impl $ident {
            /// Return the components as a `(year, month, day)` tuple.
            pub const fn ymd(&self) -> (Year, Month, Day) {
                (self.$y, self.$m, self.$d)
            }
        }

        impl From<$ident> for crate::Date {
            fn from(value: $ident) -> Self {
                Self {
                    year: value.$y,
                    month: value.$m,
                    day: value.$d,
                }
            }
        }

        impl From<crate::Date> for $ident {
            fn from(value: crate::Date) -> Self {
                Self {
                    $y: value.year,
                    $m: value.month,
                    $d: value.day,
                }
            }
        }

        impl From<(Year, Month, Day)> for $ident {
            fn from(($y, $m, $d): (Year, Month, Day)) -> Self {
                Self { $y, $m, $d }
            }
        }

        impl From<$ident> for crate::DateInput {
            fn from(value: $ident) -> Self {
                Self {
                    $y: Some(value.$y),
                    $m: Some(value.$m),
                    $d: Some(value.$d),
                    ..Default::default()
                }
            }
        }

        impl core::fmt::Display for $ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&crate::utility::format_ymd(self.$y, self.$m, self.$d))
            }
        }
    };
}
