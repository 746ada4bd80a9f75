//! Settings: defaults, layered files, and the save target.
//!
//! # Lifecycle
//!
//! ```text
//! open(defaults, files)  ──►  get / value / flag   (read effective values)
//!         │                         │
//!         │                    set (memory only)
//!         │                         │
//!         └──── reload ◄────────────┤
//!                                 save  ──►  last file in the list
//! ```
//!
//! On open, the effective settings start as a copy of the defaults; every
//! existing file in the list is then parsed and overlaid in order, so a later
//! file wins over an earlier one.  Missing files are skipped; they are created
//! by the first [`Settings::save`].
//!
//! `save` writes the complete effective settings (defaults included) to the
//! last file only.  Earlier files are never modified.
//!
//! # Protected keys
//!
//! Options whose name starts with `_` can be read but not [`Settings::set`];
//! they are meant to be edited by hand in the file.

use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use inifig_core::{
    check_option_name, check_section_name, check_value, parse_flag, parse_ini, write_ini,
    Defaults, IniDocument, IniError, MergedSettings, Origin, SettingKey, UnwritableText,
    PROTECTED_PREFIX,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::file_list::FileList;
use crate::infrastructure::storage::{FsStorage, SettingsStorage};

/// Error type for settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file list was empty, so there is nowhere to save.
    #[error("no settings files given")]
    NoFiles,

    /// A file could not be read or written.  `source` is the original error.
    #[error("I/O error accessing settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file's contents are not valid INI.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: IniError,
    },

    /// The key is neither declared in the defaults nor present in any file.
    #[error("unknown setting '{0}'")]
    UnknownKey(SettingKey),

    /// The key is protected and cannot be changed through the API.
    #[error("setting '{0}' is protected and can only be changed in the file")]
    ProtectedKey(SettingKey),

    /// The key's section or option name cannot be stored in an INI file.
    #[error("setting '{key}' has an invalid name: {source}")]
    InvalidKey {
        key: SettingKey,
        #[source]
        source: UnwritableText,
    },

    /// The text could not be converted to the requested type, or cannot be
    /// stored in an INI file.
    #[error("setting '{key}' has invalid value '{value}': {reason}")]
    InvalidValue {
        key: SettingKey,
        value: String,
        reason: String,
    },
}

/// Effective settings merged from defaults and a list of INI files.
///
/// `S` is the storage backend; [`FsStorage`] unless a test supplies another.
///
/// # Examples
///
/// ```rust
/// use inifig::infrastructure::storage::MemoryStorage;
/// use inifig::{Defaults, Settings};
///
/// let storage = MemoryStorage::new().with_file("base.ini", "[GENERAL]\ntheme = light\n");
/// let defaults = Defaults::new().with("theme", "dark").with("font", "mono");
///
/// let settings = Settings::with_storage(defaults, ["base.ini", "user.ini"], storage).unwrap();
/// assert_eq!(settings.get("theme"), Some("light"));
/// assert_eq!(settings.get("font"), Some("mono"));
/// assert_eq!(settings.get("missing"), None);
/// ```
#[derive(Debug)]
pub struct Settings<S: SettingsStorage = FsStorage> {
    defaults: Defaults,
    files: FileList,
    save_path: PathBuf,
    storage: S,
    merged: MergedSettings,
}

impl Settings<FsStorage> {
    /// Loads `files` from disk over `defaults`.
    ///
    /// `files` may be a single path or an ordered list of paths.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoFiles`] for an empty list,
    /// [`SettingsError::Io`] for read failures other than a missing file, and
    /// [`SettingsError::Parse`] for malformed INI.
    pub fn open(defaults: Defaults, files: impl Into<FileList>) -> Result<Self, SettingsError> {
        Self::with_storage(defaults, files, FsStorage::new())
    }
}

impl<S: SettingsStorage> Settings<S> {
    /// Loads `files` through `storage` over `defaults`.
    ///
    /// # Errors
    ///
    /// See [`Settings::open`].
    pub fn with_storage(
        defaults: Defaults,
        files: impl Into<FileList>,
        storage: S,
    ) -> Result<Self, SettingsError> {
        let files = files.into();
        let save_path = files
            .save_target()
            .ok_or(SettingsError::NoFiles)?
            .to_path_buf();
        let merged = load_layers(&defaults, &files, &storage)?;

        Ok(Self {
            defaults,
            files,
            save_path,
            storage,
            merged,
        })
    }

    /// Returns the effective text of `key`, or `None` if no source defines it.
    ///
    /// `key` is `"option"` (in the `GENERAL` section), `"section.option"`, or
    /// a [`SettingKey`].
    pub fn get(&self, key: impl Into<SettingKey>) -> Option<&str> {
        self.merged.get(&key.into())
    }

    /// Parses the effective text of `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownKey`] if no source defines the key and
    /// [`SettingsError::InvalidValue`] if the text does not parse.
    pub fn value<T>(&self, key: impl Into<SettingKey>) -> Result<T, SettingsError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let key = key.into();
        let text = self
            .merged
            .get(&key)
            .ok_or_else(|| SettingsError::UnknownKey(key.clone()))?;
        parse_as(&key, text)
    }

    /// Like [`Settings::value`], but falls back to the declared default when
    /// the effective text does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownKey`] if no source defines the key, and
    /// [`SettingsError::InvalidValue`] if neither the effective text nor a
    /// declared default parses.
    pub fn value_or_default<T>(&self, key: impl Into<SettingKey>) -> Result<T, SettingsError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let key = key.into();
        let err = match self.value::<T>(&key) {
            Ok(v) => return Ok(v),
            Err(e @ SettingsError::InvalidValue { .. }) => e,
            Err(e) => return Err(e),
        };
        let Some(default) = self.defaults.get(&key) else {
            return Err(err);
        };
        warn!("{err}; falling back to default '{default}'");
        parse_as(&key, default)
    }

    /// Reads `key` as a boolean (`1/yes/true/on` or `0/no/false/off`).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownKey`] or [`SettingsError::InvalidValue`].
    pub fn flag(&self, key: impl Into<SettingKey>) -> Result<bool, SettingsError> {
        let key = key.into();
        let text = self
            .merged
            .get(&key)
            .ok_or_else(|| SettingsError::UnknownKey(key.clone()))?;
        parse_flag(text).ok_or_else(|| SettingsError::InvalidValue {
            key: key.clone(),
            value: text.to_string(),
            reason: "expected 1/0, yes/no, true/false or on/off".to_string(),
        })
    }

    /// Assigns `value` to `key` in memory.  Nothing is written until
    /// [`Settings::save`].
    ///
    /// Only names and values that read back unchanged after a save are
    /// accepted, so a saved file can always be opened again.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidKey`] for names the INI format cannot
    /// hold, such as an empty option or one containing `=`.
    /// Returns [`SettingsError::ProtectedKey`] for `_`-prefixed options and
    /// [`SettingsError::InvalidValue`] for values that would be trimmed or
    /// cut short when read back.
    pub fn set(
        &mut self,
        key: impl Into<SettingKey>,
        value: impl Display,
    ) -> Result<(), SettingsError> {
        let key = key.into();
        check_section_name(key.section())
            .and_then(|()| check_option_name(key.option()))
            .map_err(|source| SettingsError::InvalidKey {
                key: key.clone(),
                source,
            })?;
        if key.is_protected() {
            return Err(SettingsError::ProtectedKey(key));
        }
        let value = value.to_string();
        if let Err(reason) = check_value(&value) {
            return Err(SettingsError::InvalidValue {
                key,
                value,
                reason: reason.to_string(),
            });
        }
        self.merged.assign(&key, value);
        debug!("assigned {key} in memory");
        Ok(())
    }

    /// Writes the complete effective settings to the last file in the list,
    /// replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be written.
    pub fn save(&self) -> Result<(), SettingsError> {
        let content = write_ini(self.merged.document());
        self.storage
            .write(&self.save_path, &content)
            .map_err(|source| SettingsError::Io {
                path: self.save_path.clone(),
                source,
            })?;
        info!(
            "saved {} settings to {}",
            self.merged.document().option_count(),
            self.save_path.display()
        );
        Ok(())
    }

    /// Discards unsaved assignments and re-reads every file.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::open`]; on error the current values are kept.
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        self.merged = load_layers(&self.defaults, &self.files, &self.storage)?;
        Ok(())
    }

    /// Reports where the effective value of `key` came from.
    pub fn origin(&self, key: impl Into<SettingKey>) -> Option<Origin> {
        self.merged.origin(&key.into())
    }

    /// Lists the non-protected options of `section` as `key : value` lines.
    pub fn section_summary(&self, section: &str) -> String {
        let mut out = String::new();
        if let Some(options) = self.merged.document().section(section) {
            for (option, value) in options.iter() {
                if option.starts_with(PROTECTED_PREFIX) {
                    continue;
                }
                out.push_str(&format!("{option} : {value}\n"));
            }
        }
        out
    }

    /// Read-only view of the effective settings.
    pub fn document(&self) -> &IniDocument {
        self.merged.document()
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    /// The file [`Settings::save`] writes to: the last one in the list.
    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn load_layers<S: SettingsStorage>(
    defaults: &Defaults,
    files: &FileList,
    storage: &S,
) -> Result<MergedSettings, SettingsError> {
    let mut merged = MergedSettings::from_defaults(defaults);

    for (index, path) in files.iter().enumerate() {
        let content = storage.read(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(content) = content else {
            debug!("skipping missing settings file {}", path.display());
            continue;
        };
        let layer = parse_ini(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "loaded {} options from {}",
            layer.option_count(),
            path.display()
        );
        merged.apply_file(index, &layer);
    }

    Ok(merged)
}

fn parse_as<T>(key: &SettingKey, text: &str) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse::<T>().map_err(|e| SettingsError::InvalidValue {
        key: key.clone(),
        value: text.to_string(),
        reason: e.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
