use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ProductStore handles the "what" (uniqueness, ordering, notification).
///
/// The persisted representation is one opaque blob holding the whole
/// collection. Backends never look inside it.
pub trait StorageBackend {
    /// Read the persisted blob.
    /// Returns Ok(None) if nothing has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the persisted blob.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Where the blob lives. For FsBackend, this is the real path.
    /// For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
