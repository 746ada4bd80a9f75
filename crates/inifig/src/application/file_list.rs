//! Ordered list of settings files.
//!
//! Files are loaded first to last, so a later file overrides an earlier one.
//! Only the **last** file is ever written.
//!
//! ```rust
//! use inifig::FileList;
//!
//! let files = FileList::from(["/etc/app/config.ini", "user.ini"]);
//! assert_eq!(files.save_target().unwrap().to_str(), Some("user.ini"));
//! assert_eq!(FileList::default().save_target().unwrap().to_str(), Some("config.ini"));
//! ```

use std::path::{Path, PathBuf};

/// File used when the caller does not name one.
pub const DEFAULT_FILE_NAME: &str = "config.ini";

/// Settings file paths in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

impl FileList {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Appends a file, making it the new save target.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// The file that [`Settings::save`](crate::Settings::save) writes to.
    pub fn save_target(&self) -> Option<&Path> {
        self.paths.last().map(PathBuf::as_path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for FileList {
    fn default() -> Self {
        Self::from(DEFAULT_FILE_NAME)
    }
}

impl From<&str> for FileList {
    fn from(path: &str) -> Self {
        Self::new(vec![PathBuf::from(path)])
    }
}

impl From<String> for FileList {
    fn from(path: String) -> Self {
        Self::new(vec![PathBuf::from(path)])
    }
}

impl From<&Path> for FileList {
    fn from(path: &Path) -> Self {
        Self::new(vec![path.to_path_buf()])
    }
}

impl From<PathBuf> for FileList {
    fn from(path: PathBuf) -> Self {
        Self::new(vec![path])
    }
}

impl<P: Into<PathBuf>> From<Vec<P>> for FileList {
    fn from(paths: Vec<P>) -> Self {
        Self::new(paths.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<PathBuf>, const N: usize> From<[P; N]> for FileList {
    fn from(paths: [P; N]) -> Self {
        Self::new(paths.into_iter().map(Into::into).collect())
    }
}
