//! The capability contract every registrable driver implements.

/// Level of detail for a driver's self-description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    /// The driver's registration name: a single word, matched
    /// case-insensitively.
    Name,
    /// A short phrase identifying the driver, e.g. "Bcrypt - strong hash
    /// function".
    Short,
    /// Longer help text describing what the driver is and how it works.
    Long,
}

/// Conventional placeholder callers can display when a driver or group is
/// unknown.
pub const IDENTITY_UNKNOWN: &str = "unknown";

/// Factory-and-description capability implemented by every registrable
/// driver.
///
/// `T` is the instance type the driver produces. One registry serves one
/// `T`; a driver category with heterogeneous concrete types shares a
/// registry through a boxed trait object (`T = Box<dyn SomeInterface>`).
///
/// # Example
///
/// ```
/// use hubcap::{Driver, Identity};
///
/// struct MemoryStore;
///
/// struct MemoryStoreDriver;
///
/// impl Driver<MemoryStore> for MemoryStoreDriver {
///     fn instantiate(&self) -> MemoryStore {
///         MemoryStore
///     }
///
///     fn identify(&self, level: Identity) -> String {
///         match level {
///             Identity::Name => "memory".to_string(),
///             Identity::Short => "volatile in-memory store".to_string(),
///             Identity::Long => {
///                 "Keeps every record in process memory; contents are lost on shutdown."
///                     .to_string()
///             }
///         }
///     }
/// }
/// ```
pub trait Driver<T>: Send + Sync {
    /// Produce a fresh instance of the underlying driver type.
    ///
    /// Takes no arguments and must not fail; a driver whose construction can
    /// fail encodes the failure in `T` itself (e.g. a builder or a
    /// connect-on-first-use handle).
    fn instantiate(&self) -> T;

    /// Self-description at the requested level of detail.
    ///
    /// The [`Identity::Name`] answer is the name the driver is registered
    /// under: a single word, unique (case-insensitively) within its group,
    /// never empty and never the reserved default-selection token.
    fn identify(&self, level: Identity) -> String;
}
