//! Error types of the tarikh crate.

/// Failures of [`crate::Registry`] configuration calls.
///
/// None of these are fatal to the process, the registry is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Returned when an adapter table lacks some of the required operations.
    #[error("calendar adapter `{name}` missing required operations: {}", .missing.join(", "))]
    MissingOperations {
        /// The key the adapter was registered under.
        name: String,
        /// Names of the absent operations, in contract order.
        missing: Vec<&'static str>,
    },

    /// Returned when registering under an empty (or whitespace only) key.
    #[error("calendar type name must not be empty")]
    EmptyName,

    /// Returned when a key that is not registered is used where one is required.
    #[error("unknown calendar type: {name}")]
    UnknownCalendar {
        /// The key that was looked up (lowercased).
        name: String,
    },
}

/// Failures of normalizing loosely shaped dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when none of the accepted keys carries the component.
    #[error("date has no {field} (checked every accepted key)")]
    MissingField {
        /// The missing component: `year`, `month` or `day`.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_operations() {
        let e = RegistryError::MissingOperations {
            name: "mayan".into(),
            missing: vec!["is_leap_year", "to_jalaali"],
        };
        assert_eq!(
            e.to_string(),
            "calendar adapter `mayan` missing required operations: is_leap_year, to_jalaali"
        );
    }

    #[test]
    fn error_empty_name() {
        assert_eq!(
            RegistryError::EmptyName.to_string(),
            "calendar type name must not be empty"
        );
    }

    #[test]
    fn error_unknown_calendar() {
        let e = RegistryError::UnknownCalendar {
            name: "julian".into(),
        };
        assert_eq!(e.to_string(), "unknown calendar type: julian");
    }

    #[test]
    fn error_missing_field() {
        let e = DateError::MissingField { field: "day" };
        assert_eq!(e.to_string(), "date has no day (checked every accepted key)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<RegistryError>();
        assert_impl::<DateError>();
    }
}
