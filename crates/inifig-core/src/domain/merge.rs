//! Layered merge policy.
//!
//! The effective settings are built bottom-up:
//!
//! ```text
//! Defaults  ──►  file 0  ──►  file 1  ──►  …  ──►  file N-1  ──►  assignments
//!  (lowest)                                                        (highest)
//! ```
//!
//! Each layer overwrites the options it mentions and leaves everything else
//! untouched, so a key that no file mentions keeps its default.  Options that
//! only appear in a file are added to the result.
//!
//! Alongside each value the merge records its [`Origin`], which lets callers
//! answer "why does this setting have this value?".

use std::collections::HashMap;

use tracing::trace;

use crate::domain::defaults::Defaults;
use crate::domain::key::SettingKey;
use crate::ini::document::IniDocument;

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Declared in [`Defaults`] and not overridden.
    Default,
    /// Read from the file at this index of the file list.
    File(usize),
    /// Assigned in memory since the settings were last loaded.
    Assigned,
}

/// The result of merging defaults and file layers.
#[derive(Debug, Clone, Default)]
pub struct MergedSettings {
    document: IniDocument,
    origins: HashMap<SettingKey, Origin>,
}

impl MergedSettings {
    /// Starts a merge with `defaults` as the bottom layer.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        let document = defaults.document().clone();
        let mut origins = HashMap::new();
        for (section, options) in document.sections() {
            for (option, _) in options.iter() {
                origins.insert(SettingKey::new(section, option), Origin::Default);
            }
        }
        Self { document, origins }
    }

    /// Overlays the file at position `index` of the file list.
    pub fn apply_file(&mut self, index: usize, layer: &IniDocument) {
        self.document.merge_from(layer);
        for (section, options) in layer.sections() {
            for (option, _) in options.iter() {
                self.origins
                    .insert(SettingKey::new(section, option), Origin::File(index));
            }
        }
        trace!(
            "applied file layer {index} ({} options)",
            layer.option_count()
        );
    }

    /// Overrides a single value in memory.
    pub fn assign(&mut self, key: &SettingKey, value: impl Into<String>) {
        self.document.set(key.section(), key.option(), value);
        self.origins.insert(key.clone(), Origin::Assigned);
    }

    pub fn get(&self, key: &SettingKey) -> Option<&str> {
        self.document.get(key.section(), key.option())
    }

    pub fn origin(&self, key: &SettingKey) -> Option<Origin> {
        self.origins.get(key).copied()
    }

    pub fn document(&self) -> &IniDocument {
        &self.document
    }
}

/// Merges `defaults` with `layers` in order; later layers win.
pub fn merge_layers<'a>(
    defaults: &Defaults,
    layers: impl IntoIterator<Item = &'a IniDocument>,
) -> MergedSettings {
    let mut merged = MergedSettings::from_defaults(defaults);
    for (index, layer) in layers.into_iter().enumerate() {
        merged.apply_file(index, layer);
    }
    merged
}

// ── Tests ─────────────────────────────────────────────────────────────────────
