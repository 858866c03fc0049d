//! Hubcap - a generic, in-process driver registry.
//!
//! Independent components ("drivers") register themselves under a named
//! group, get looked up by case-insensitive name, report self-describing
//! help text, and are instantiated on demand. Each group can carry a
//! designated default driver, resolved through the reserved
//! [`DEFAULT_SELECTION`] sentinel.
//!
//! The registry performs no I/O and holds no global state: construct a
//! [`DriverRegistry`] wherever the application is composed and share it by
//! reference. All operations are safe to call from concurrent threads.
//!
//! # Example
//!
//! ```rust
//! use hubcap::{Driver, DriverRegistry, Identity, DEFAULT_SELECTION};
//!
//! struct MemoryStore;
//!
//! struct MemoryStoreDriver;
//!
//! impl Driver<MemoryStore> for MemoryStoreDriver {
//!     fn instantiate(&self) -> MemoryStore {
//!         MemoryStore
//!     }
//!
//!     fn identify(&self, level: Identity) -> String {
//!         match level {
//!             Identity::Name => "memory".to_string(),
//!             Identity::Short => "volatile in-memory store".to_string(),
//!             Identity::Long => {
//!                 "Keeps every record in process memory; contents are lost on shutdown."
//!                     .to_string()
//!             }
//!         }
//!     }
//! }
//!
//! let registry = DriverRegistry::new();
//! registry.register("store", MemoryStoreDriver);
//!
//! assert!(registry.is_registered("store", "Memory"));
//! let _store = registry.new_instance("store", "memory").unwrap();
//!
//! registry.mark_default("store", "memory");
//! let _store = registry.new_instance("store", DEFAULT_SELECTION).unwrap();
//! assert_eq!(registry.default_name("store").unwrap(), "memory");
//! ```

pub mod driver;
pub mod error;
pub mod registry;

// Re-export commonly used types
pub use driver::{Driver, Identity, IDENTITY_UNKNOWN};
pub use error::{RegistryError, Result};
pub use registry::{DriverRegistry, DEFAULT_SELECTION, NAME_SEPARATOR};
