use crate::error::Result;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `StudentStore` handles the "what" (uniqueness, ordering, sync).
///
/// All methods take `&self`; backends that need mutation use interior
/// mutability (roster is single-threaded).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the slot does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
