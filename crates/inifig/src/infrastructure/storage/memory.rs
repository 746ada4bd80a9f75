//! In-memory [`SettingsStorage`] for unit testing and dry runs.
//!
//! Files live in a map keyed by path.  Every write is also appended to a log
//! so tests can assert exactly which files a save touched.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::SettingsStorage;

/// A [`SettingsStorage`] that never touches the disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, String>>,
    writes: RefCell<Vec<PathBuf>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, as if it already existed on disk.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    /// Returns the current contents of `path`.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Returns every path passed to [`SettingsStorage::write`], in call order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
