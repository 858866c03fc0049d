//! Integration tests for the public registry surface.
//!
//! These tests exercise the registry the way a host application would: a
//! driver category whose concrete types hide behind a boxed trait object,
//! registered once at composition time and resolved from consumer code.

use std::collections::HashMap;
use std::sync::Arc;

use hubcap::{Driver, DriverRegistry, Identity, RegistryError, DEFAULT_SELECTION};

/// The interface every store driver in these tests produces.
trait Store {
    fn put(&mut self, key: &str, value: &str);
    fn get(&self, key: &str) -> Option<String>;
    fn backend(&self) -> &'static str;
}

#[derive(Default)]
struct MemoryStore {
    entries: HashMap<String, String>,
}

impl Store for MemoryStore {
    fn put(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// Accepts every write and retains nothing.
struct NullStore;

impl Store for NullStore {
    fn put(&mut self, _key: &str, _value: &str) {}

    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn backend(&self) -> &'static str {
        "null"
    }
}

struct MemoryDriver;

impl Driver<Box<dyn Store>> for MemoryDriver {
    fn instantiate(&self) -> Box<dyn Store> {
        Box::new(MemoryStore::default())
    }

    fn identify(&self, level: Identity) -> String {
        match level {
            Identity::Name => "Memory".to_string(),
            Identity::Short => "volatile in-memory store".to_string(),
            Identity::Long => {
                "Keeps every record in process memory; contents are lost on shutdown."
                    .to_string()
            }
        }
    }
}

struct NullDriver;

impl Driver<Box<dyn Store>> for NullDriver {
    fn instantiate(&self) -> Box<dyn Store> {
        Box::new(NullStore)
    }

    fn identify(&self, level: Identity) -> String {
        match level {
            Identity::Name => "Null".to_string(),
            Identity::Short => "store that discards every write".to_string(),
            Identity::Long => "Accepts all operations and retains nothing.".to_string(),
        }
    }
}

/// Registry populated the way a host would at composition time.
fn store_registry() -> DriverRegistry<Box<dyn Store>> {
    let registry = DriverRegistry::new();
    registry.register("store", MemoryDriver);
    registry.register("store", NullDriver);
    registry
}

#[test]
fn test_end_to_end_registration_and_resolution() {
    let registry = store_registry();

    // Names match case-insensitively in every lookup path.
    assert!(registry.is_registered("Store", "MEMORY"));
    let mut store = registry.new_instance("store", "memory").unwrap();
    assert_eq!(store.backend(), "memory");

    store.put("alpha", "1");
    assert_eq!(store.get("alpha").as_deref(), Some("1"));

    // A second instance starts empty: instantiation shares no state.
    let other = registry.new_instance("STORE", "Memory").unwrap();
    assert_eq!(other.get("alpha"), None);
}

#[test]
fn test_end_to_end_default_management() {
    let registry = store_registry();

    // Two drivers, no default flagged yet.
    assert!(matches!(
        registry.new_default_instance("store"),
        Err(RegistryError::NoDefaultDriver { .. })
    ));

    assert!(registry.mark_default("store", "null"));
    let store = registry.new_instance("store", DEFAULT_SELECTION).unwrap();
    assert_eq!(store.backend(), "null");

    // The reported name is case-preserved as the driver registered it.
    assert_eq!(registry.default_name("store").unwrap(), "Null");
}

#[test]
fn test_help_text_matches_driver_identity() {
    let registry = store_registry();

    assert_eq!(registry.help("store", "memory", Identity::Name), "Memory");
    assert_eq!(
        registry.help("store", "memory", Identity::Short),
        "volatile in-memory store"
    );
    assert_eq!(
        registry.help("store", "null", Identity::Long),
        "Accepts all operations and retains nothing."
    );
    assert_eq!(registry.help("store", "postgres", Identity::Long), "");
}

#[test]
fn test_lookup_driver_for_introspection() {
    let registry = store_registry();

    let driver = registry.lookup_driver("store", "null").unwrap();
    assert_eq!(driver.identify(Identity::Name), "Null");

    // The handle instantiates without going back through the registry.
    let store = driver.instantiate();
    assert_eq!(store.backend(), "null");
}

#[test]
fn test_list_groups_reports_counts() {
    let registry = store_registry();

    let groups = registry.list_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups["store"], 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = Arc::new(store_registry());
    registry.mark_default("store", "memory");

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let mut store = registry.must_new_default_instance("store");
                let key = format!("worker-{worker}");
                store.put(&key, "done");
                assert_eq!(store.get(&key).as_deref(), Some("done"));
                assert!(registry.is_registered("store", "null"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
