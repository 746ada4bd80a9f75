//! Ordered in-memory representation of an INI file.
//!
//! An [`IniDocument`] is a list of named [`Section`]s, each holding an ordered
//! list of `option = value` pairs.  Both levels preserve insertion order so a
//! document that is parsed and written back keeps its layout.
//!
//! # Why `IndexMap`? (for beginners)
//!
//! A `HashMap` gives O(1) lookup but iterates in an arbitrary order, which
//! would shuffle the lines of a config file on every save.  `IndexMap` gives
//! the same O(1) lookup while iterating in insertion order.
//!
//! # Name normalization
//!
//! Option names are case-insensitive: `Theme`, `THEME` and `theme` all refer to
//! the same option and are stored as lowercase.  Section names are kept exactly
//! as written.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lowercases an option name and strips surrounding whitespace.
pub fn normalize_option(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The options of a single `[section]`, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for `option`, if any.
    pub fn get(&self, option: &str) -> Option<&str> {
        self.entries
            .get(&normalize_option(option))
            .map(String::as_str)
    }

    /// Inserts or replaces `option`.
    ///
    /// Replacing keeps the option's original position.
    pub fn set(&mut self, option: &str, value: impl Into<String>) {
        self.entries.insert(normalize_option(option), value.into());
    }

    pub fn contains(&self, option: &str) -> bool {
        self.entries.contains_key(&normalize_option(option))
    }

    /// Iterates `(option, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered collection of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IniDocument {
    sections: IndexMap<String, Section>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Returns the named section, appending an empty one if it does not exist.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Looks up `option` inside `section`.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(option))
    }

    /// Sets `option` inside `section`, creating the section if needed.
    pub fn set(&mut self, section: &str, option: &str, value: impl Into<String>) {
        self.section_mut(section).set(option, value);
    }

    /// Iterates `(section name, section)` pairs in order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlays every option of `other` onto `self`.
    ///
    /// Options present in both take `other`'s value; options and sections
    /// only present in `other` are appended.
    pub fn merge_from(&mut self, other: &IniDocument) {
        for (name, section) in other.sections() {
            let target = self.section_mut(name);
            for (option, value) in section.iter() {
                target.set(option, value);
            }
        }
    }

    /// Total number of options across all sections.
    pub fn option_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
