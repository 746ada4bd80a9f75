//! File-system backed [`SettingsStorage`].

use std::io;
use std::path::Path;

use tracing::debug;

use super::SettingsStorage;

/// Reads and writes settings files on the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsStorage for FsStorage {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("settings file {} not found, skipping", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        // Ensure directory exists before writing.
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        std::fs::write(path, contents)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
