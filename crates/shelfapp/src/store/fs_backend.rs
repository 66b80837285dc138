use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores the collection as a single JSON file.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.data_file) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ShelfError::Io(e)),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        let root = match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.ensure_dir(&root)?;

        // Atomic write
        let tmp_file = root.join(format!(".products-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, bytes).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
