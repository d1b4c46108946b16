//! Lookup of calendar adapters by name.

use core::fmt::{Debug, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    CalendarAdapter, CalendarDate, ChineseAdapter, GregorianAdapter, HijriAdapter,
    IntoCalendarAdapter, JalaaliAdapter, RegistryError,
};

/// Maps case insensitive calendar names to their adapters.
///
/// Lookups never fail: an unknown name logs a warning and yields the fallback adapter (Jalaali
/// unless changed with [`Registry::set_fallback`]). Aliases of a built-in calendar share one
/// adapter instance.
///
/// ```
/// use tarikh::{CalendarAdapter, Date, Registry};
///
/// let registry = Registry::new();
/// let shamsi = registry.resolve("Shamsi");
/// assert_eq!(shamsi.from_gregorian(Date::new(2024, 12, 7)), Date::new(1403, 9, 17));
/// ```
#[derive(Clone)]
pub struct Registry {
    adapters: IndexMap<String, Arc<dyn CalendarAdapter>>,
    fallback: Arc<dyn CalendarAdapter>,
}

impl Registry {
    /// A registry holding every built-in calendar under all of its aliases.
    pub fn new() -> Self {
        let jalaali: Arc<dyn CalendarAdapter> = Arc::new(JalaaliAdapter);
        let builtins: [(&[&str], Arc<dyn CalendarAdapter>); 4] = [
            (&["jalaali", "jalali", "shamsi"], jalaali.clone()),
            (&["gregorian", "miladi"], Arc::new(GregorianAdapter)),
            (&["hijri", "islamic", "qamari"], Arc::new(HijriAdapter)),
            (&["chinese", "lunar"], Arc::new(ChineseAdapter)),
        ];

        let mut adapters = IndexMap::new();
        for (aliases, adapter) in builtins {
            for alias in aliases {
                adapters.insert((*alias).to_owned(), adapter.clone());
            }
        }

        Self {
            adapters,
            fallback: jalaali,
        }
    }

    /// The adapter registered under `name`, or the fallback when there is none.
    pub fn resolve(&self, name: &str) -> Arc<dyn CalendarAdapter> {
        match self.get(name) {
            Some(adapter) => adapter,
            None => {
                let fallback = self.fallback.kind();
                warn!(name, %fallback, "unknown calendar type, using the fallback");
                self.fallback.clone()
            }
        }
    }

    /// The adapter registered under `name`, without falling back.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CalendarAdapter>> {
        self.adapters.get(&key(name)).cloned()
    }

    /// Register `adapter` under `name` (lowercased), replacing any previous adapter of that name.
    ///
    /// The registry is left untouched when the name is empty or the adapter is incomplete.
    pub fn register(
        &mut self,
        name: &str,
        adapter: impl IntoCalendarAdapter,
    ) -> Result<(), RegistryError> {
        let name = key(name);
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let adapter = adapter.into_adapter(&name)?;
        let kind = adapter.kind();
        if self.adapters.insert(name.clone(), adapter).is_some() {
            debug!(name = name.as_str(), %kind, "replaced calendar adapter");
        } else {
            debug!(name = name.as_str(), %kind, "registered calendar adapter");
        }
        Ok(())
    }

    /// Every registered name, in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.adapters.keys().map(String::as_str).collect()
    }

    /// Use the adapter registered under `name` for unknown names from now on.
    pub fn set_fallback(&mut self, name: &str) -> Result<(), RegistryError> {
        let adapter = self.strict(name)?;
        debug!(name, kind = %adapter.kind(), "changed fallback calendar");
        self.fallback = adapter;
        Ok(())
    }

    /// [`Registry::get`] failing with [`RegistryError::UnknownCalendar`].
    fn strict(&self, name: &str) -> Result<Arc<dyn CalendarAdapter>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownCalendar { name: key(name) })
    }

    /// The adapter used for unknown names.
    pub fn fallback(&self) -> Arc<dyn CalendarAdapter> {
        self.fallback.clone()
    }

    /// Convert a tagged date into the calendar registered under `to`, through Gregorian.
    ///
    /// The source adapter is looked up by the tag name of `date`, so a runtime calendar has to be
    /// registered under its own tag to be converted from. Neither side falls back: an unknown
    /// source or target is an error.
    pub fn convert(&self, date: CalendarDate, to: &str) -> Result<CalendarDate, RegistryError> {
        let source = self.strict(date.calendar.name())?;
        let target = self.strict(to)?;
        let gregorian = source.to_gregorian(date.date);
        Ok(target.tag(target.from_gregorian(gregorian)))
    }
}

/// Registry key of a user given name.
fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field(
                "adapters",
                &self
                    .adapters
                    .iter()
                    .map(|(name, adapter)| (name.as_str(), adapter.kind()))
                    .collect::<Vec<_>>(),
            )
            .field("fallback", &self.fallback.kind())
            .finish()
    }
}
