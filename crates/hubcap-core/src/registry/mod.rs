//! Driver registration, lookup, and default selection.
//!
//! This module provides the registry itself:
//! - **Registration**: drivers insert themselves under a named group, keyed
//!   by the name they report through their capability contract
//! - **Lookup and instantiation**: consumers resolve a (group, name) pair —
//!   case-insensitively — to a fresh driver instance
//! - **Default management**: one driver per group can be flagged as the
//!   default and resolved through a reserved sentinel name
//!
//! Keys are normalized to `lowercase(group) + "." + lowercase(name)`; the
//! backing map is ordered, so every scan is deterministic in key order.

pub mod driver_registry;

pub use driver_registry::{DriverRegistry, DEFAULT_SELECTION, NAME_SEPARATOR};
