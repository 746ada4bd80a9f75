//! Storage infrastructure: reading and writing settings files.
//!
//! The [`SettingsStorage`] trait is the only place the settings store touches
//! the outside world.  The `fs` sub-module is the production implementation;
//! `memory` keeps files in a map so tests (and dry runs) never hit the disk.
//!
//! The settings store only sees the trait, so its merge and save logic can be
//! tested without temporary directories.

use std::io;
use std::path::Path;

pub mod fs;
pub mod memory;

pub use fs::FsStorage;
pub use memory::MemoryStorage;

/// Trait abstracting access to settings files.
///
/// The production implementation is [`FsStorage`]; tests use
/// [`MemoryStorage`] or the generated `MockSettingsStorage`.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStorage {
    /// Returns the file's text, or `None` when the file does not exist.
    ///
    /// Any other failure (permissions, invalid UTF-8, …) is returned as is.
    fn read(&self, path: &Path) -> io::Result<Option<String>>;

    /// Replaces the file's contents with `contents`, creating the file and
    /// its parent directories when missing.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
