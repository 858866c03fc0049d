//! Error types for registry operations.
//!
//! Contract violations by integrating code (registering a driver with an
//! invalid name, registering the same key twice, unwrapping a lookup through
//! a `must_*` variant) are panics, not errors; this module only covers the
//! runtime conditions callers are expected to branch on.

use thiserror::Error;

/// Main error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No driver has ever been registered with this registry.
    #[error("driver registry is empty: no drivers registered")]
    Empty,

    /// No driver matches the requested (group, name) pair.
    #[error("invalid driver: {group}:{name}")]
    InvalidDriver { group: String, name: String },

    /// The group has no default driver configured.
    #[error("no default driver set for group '{group}'")]
    NoDefaultDriver { group: String },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
