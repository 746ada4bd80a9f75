//! Default setting values declared by the embedding application.
//!
//! Defaults are the bottom layer of every merge: a key that no file mentions
//! keeps its default.  They can be declared in code:
//!
//! ```rust
//! use inifig_core::Defaults;
//!
//! let defaults = Defaults::new()
//!     .with("theme", "dark")
//!     .with("network.port", 8080)
//!     .with("network.verbose", false);
//! assert_eq!(defaults.get(&"network.port".into()), Some("8080"));
//! ```
//!
//! or loaded from TOML, where top-level scalars go to the `GENERAL` section and
//! each one-level table becomes a section:
//!
//! ```toml
//! theme = "dark"
//!
//! [network]
//! port = 8080
//! ```

use std::fmt::Display;

use thiserror::Error;

use crate::domain::key::{SettingKey, DEFAULT_SECTION};
use crate::ini::document::IniDocument;

/// Error type for loading defaults from TOML.
#[derive(Debug, Error)]
pub enum DefaultsError {
    /// The TOML text could not be parsed.
    #[error("failed to parse defaults TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// An array or a table nested below section level was found.
    #[error("default for '{key}' must be a string, number, boolean or datetime")]
    UnsupportedValue { key: String },
}

/// Ordered default values, stored as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    document: IniDocument,
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Defaults::insert`].
    pub fn with(mut self, key: impl Into<SettingKey>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Declares a default, replacing an earlier declaration of the same key.
    pub fn insert(&mut self, key: impl Into<SettingKey>, value: impl Display) {
        let key = key.into();
        self.document
            .set(key.section(), key.option(), value.to_string());
    }

    pub fn get(&self, key: &SettingKey) -> Option<&str> {
        self.document.get(key.section(), key.option())
    }

    pub fn document(&self) -> &IniDocument {
        &self.document
    }

    pub fn len(&self) -> usize {
        self.document.option_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parses defaults declared in TOML.
    ///
    /// # Errors
    ///
    /// Returns [`DefaultsError::Toml`] for malformed TOML and
    /// [`DefaultsError::UnsupportedValue`] for arrays or nested tables.
    pub fn from_toml_str(text: &str) -> Result<Self, DefaultsError> {
        let table: toml::Table = toml::from_str(text)?;
        let mut defaults = Self::new();

        for (name, value) in &table {
            match value {
                toml::Value::Table(section) => {
                    defaults.document.section_mut(name);
                    for (option, value) in section {
                        let text = scalar_text(value).ok_or_else(|| {
                            DefaultsError::UnsupportedValue {
                                key: format!("{name}.{option}"),
                            }
                        })?;
                        defaults.insert(SettingKey::new(name.as_str(), option), text);
                    }
                }
                other => {
                    let text = scalar_text(other)
                        .ok_or_else(|| DefaultsError::UnsupportedValue { key: name.clone() })?;
                    defaults.insert(SettingKey::new(DEFAULT_SECTION, name), text);
                }
            }
        }

        Ok(defaults)
    }
}

impl From<IniDocument> for Defaults {
    fn from(document: IniDocument) -> Self {
        Self { document }
    }
}

fn scalar_text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(d) => Some(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
