//! File-backed storage implementation.
//!
//! Each key maps to one file directly under the store's root directory.
//! The directory is created lazily on the first write, so constructing a
//! store never touches the filesystem.

use std::io;
use std::path::{Path, PathBuf};

use keepsake_types::error::{KeepsakeError, Result};

use crate::Storage;

/// A key-value store persisting each entry as a file under `root`.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`. The directory does not need to
    /// exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to its backing file path.
    ///
    /// Keys are bare file names; anything that would escape the root
    /// directory is rejected.
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains('/')
            || key.contains('\\')
        {
            return Err(KeepsakeError::Storage(format!("invalid key: {key:?}")));
        }
        Ok(self.root.join(key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.entry_path(key)?;
        match std::fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.entry_path(key)?;
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
