//! The driver registry: registration, lookup, instantiation, and default
//! selection.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::driver::{Driver, Identity};
use crate::error::{RegistryError, Result};

/// Reserved sentinel passed as a driver name to request the group's default
/// driver. Never usable as a real driver name.
pub const DEFAULT_SELECTION: &str = "_*_";

/// Separator between the group and driver name inside a registry key.
///
/// Reserved: a group or driver name containing it will still register, but
/// exact-key matching is no longer guaranteed for such names.
pub const NAME_SEPARATOR: &str = ".";

/// One registry entry. Group and name are stored exactly as supplied;
/// case-insensitive matching happens through the normalized key.
struct DriverRecord<T> {
    group: String,
    name: String,
    driver: Arc<dyn Driver<T>>,
    default: bool,
}

/// A registry of drivers grouped under named categories.
///
/// `T` is the instance type every registered driver produces. Groups and
/// driver names are matched case-insensitively; records are never removed
/// once registered.
///
/// All operations take `&self` and are safe to call from concurrent threads:
/// a single internal mutex guards the backing map for the full duration of
/// each operation.
pub struct DriverRegistry<T> {
    drivers: Mutex<BTreeMap<String, DriverRecord<T>>>,
}

impl<T> Default for DriverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DriverRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            drivers: Mutex::new(BTreeMap::new()),
        }
    }

    // ========================================
    // Registration
    // ========================================

    /// Register a driver into a group under the name the driver reports for
    /// [`Identity::Name`].
    ///
    /// Registration happens once per (group, name) pair, typically during
    /// component initialization; there is no unregistration.
    ///
    /// # Panics
    ///
    /// Panics if the driver reports an empty name or the reserved
    /// [`DEFAULT_SELECTION`] token, or if a driver is already registered
    /// under the same normalized key. Both are contract violations by the
    /// integrating code, not runtime conditions. The existing record is left
    /// untouched and the registry remains usable.
    pub fn register<D>(&self, group: &str, driver: D)
    where
        D: Driver<T> + 'static,
    {
        let name = driver.identify(Identity::Name);
        if name.is_empty() || name == DEFAULT_SELECTION {
            panic!("driver for group '{group}' did not supply a valid name");
        }

        let key = registry_key(group, &name);
        let mut drivers = self.drivers.lock();
        if drivers.contains_key(&key) {
            panic!("driver '{key}' is already registered");
        }

        debug!("registered driver '{}' in group '{}'", name, group);
        drivers.insert(
            key,
            DriverRecord {
                group: group.to_string(),
                name,
                driver: Arc::new(driver),
                default: false,
            },
        );
    }

    /// Whether a driver is registered under the (group, name) pair, matched
    /// case-insensitively. Unknown pairs answer `false`, never an error.
    pub fn is_registered(&self, group: &str, name: &str) -> bool {
        self.drivers.lock().contains_key(&registry_key(group, name))
    }

    /// Number of registered drivers across all groups.
    pub fn len(&self) -> usize {
        self.drivers.lock().len()
    }

    /// Whether no driver has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.drivers.lock().is_empty()
    }

    // ========================================
    // Lookup and instantiation
    // ========================================

    /// Return the registered capability object itself, not a new instance.
    ///
    /// Useful for introspection: the returned handle answers `identify` and
    /// `instantiate` from anywhere without going back through the registry.
    /// To resolve the group default use [`default_name`](Self::default_name)
    /// first; the [`DEFAULT_SELECTION`] token is not special here.
    pub fn lookup_driver(&self, group: &str, name: &str) -> Result<Arc<dyn Driver<T>>> {
        self.drivers
            .lock()
            .get(&registry_key(group, name))
            .map(|record| Arc::clone(&record.driver))
            .ok_or_else(|| RegistryError::InvalidDriver {
                group: group.to_string(),
                name: name.to_string(),
            })
    }

    /// Instantiate the named driver from a group.
    ///
    /// Passing [`DEFAULT_SELECTION`] as the name resolves the group's
    /// default driver instead. Fails with [`RegistryError::Empty`] before
    /// anything else when no driver has ever been registered.
    pub fn new_instance(&self, group: &str, name: &str) -> Result<T> {
        let drivers = self.drivers.lock();
        if drivers.is_empty() {
            return Err(RegistryError::Empty);
        }

        if name == DEFAULT_SELECTION {
            return resolve_default(&drivers, group);
        }

        match drivers.get(&registry_key(group, name)) {
            Some(record) => Ok(record.driver.instantiate()),
            None => Err(RegistryError::InvalidDriver {
                group: group.to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Like [`new_instance`](Self::new_instance), but panics on any error.
    ///
    /// For call sites where an unresolved driver is a programming error
    /// rather than a condition to handle.
    pub fn must_new_instance(&self, group: &str, name: &str) -> T {
        match self.new_instance(group, name) {
            Ok(instance) => instance,
            Err(err) => panic!("{err}"),
        }
    }

    /// Instantiate the default driver of a group.
    ///
    /// Equivalent to [`new_instance`](Self::new_instance) with
    /// [`DEFAULT_SELECTION`] as the name.
    pub fn new_default_instance(&self, group: &str) -> Result<T> {
        self.new_instance(group, DEFAULT_SELECTION)
    }

    /// Like [`new_default_instance`](Self::new_default_instance), but panics
    /// on any error.
    pub fn must_new_default_instance(&self, group: &str) -> T {
        self.must_new_instance(group, DEFAULT_SELECTION)
    }

    // ========================================
    // Default management
    // ========================================

    /// Flag the named driver as the default for its group.
    ///
    /// Returns `true` if the driver exists and was flagged, `false` when the
    /// key is unknown, the registry is empty, or the name is the reserved
    /// [`DEFAULT_SELECTION`] token. A previously flagged driver in the same
    /// group is not cleared; when several records carry the flag, scans pick
    /// the first in lexicographic key order.
    pub fn mark_default(&self, group: &str, name: &str) -> bool {
        if name == DEFAULT_SELECTION {
            return false;
        }

        match self.drivers.lock().get_mut(&registry_key(group, name)) {
            Some(record) => {
                record.default = true;
                debug!("marked driver '{}' as default for group '{}'", name, group);
                true
            }
            None => false,
        }
    }

    /// Name of the group's default driver, case-preserved as registered.
    ///
    /// Only drivers explicitly flagged through
    /// [`mark_default`](Self::mark_default) are reported; the single-driver
    /// fallback that [`new_default_instance`](Self::new_default_instance)
    /// applies does not count here.
    pub fn default_name(&self, group: &str) -> Result<String> {
        let drivers = self.drivers.lock();
        let prefix = group_prefix(group);
        drivers
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .find(|(_, record)| record.default)
            .map(|(_, record)| record.name.clone())
            .ok_or_else(|| RegistryError::NoDefaultDriver {
                group: group.to_string(),
            })
    }

    // ========================================
    // Introspection
    // ========================================

    /// Help text for the named driver at the requested level of detail.
    ///
    /// Returns an empty string when the (group, name) pair is unknown or the
    /// registry is empty — a missing driver is not an error for display
    /// purposes.
    pub fn help(&self, group: &str, name: &str, level: Identity) -> String {
        self.drivers
            .lock()
            .get(&registry_key(group, name))
            .map(|record| record.driver.identify(level))
            .unwrap_or_default()
    }

    /// Tally of registered drivers per group label.
    ///
    /// Labels are case-preserved as supplied to
    /// [`register`](Self::register): "SQL" and "sql" share a key namespace
    /// but count under their own labels.
    pub fn list_groups(&self) -> BTreeMap<String, usize> {
        let drivers = self.drivers.lock();
        let mut groups = BTreeMap::new();
        for record in drivers.values() {
            *groups.entry(record.group.clone()).or_insert(0) += 1;
        }
        groups
    }
}

/// Resolve a group's default driver: the first record in key order carrying
/// the default flag, or — when the registry holds exactly one record in
/// total — that sole record. The count is registry-wide, not per group.
fn resolve_default<T>(drivers: &BTreeMap<String, DriverRecord<T>>, group: &str) -> Result<T> {
    let prefix = group_prefix(group);
    let sole_record = drivers.len() == 1;

    for (_, record) in drivers.iter().filter(|(key, _)| key.starts_with(&prefix)) {
        if record.default || sole_record {
            return Ok(record.driver.instantiate());
        }
    }

    Err(RegistryError::NoDefaultDriver {
        group: group.to_string(),
    })
}

/// Normalized map key: `lowercase(group) + "." + lowercase(name)`.
fn registry_key(group: &str, name: &str) -> String {
    format!(
        "{}{}{}",
        group.to_lowercase(),
        NAME_SEPARATOR,
        name.to_lowercase()
    )
}

/// Key prefix shared by every record of a group.
fn group_prefix(group: &str) -> String {
    format!("{}{}", group.to_lowercase(), NAME_SEPARATOR)
}
