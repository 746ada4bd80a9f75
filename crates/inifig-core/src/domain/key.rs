//! Setting keys.
//!
//! A setting is addressed by the section it lives in and its option name.
//! Callers usually write keys as text:
//!
//! | Text            | Section    | Option  |
//! |-----------------|------------|---------|
//! | `theme`         | `GENERAL`  | `theme` |
//! | `network.port`  | `network`  | `port`  |
//! | `Network.Port`  | `Network`  | `port`  |
//!
//! Only the first `.` separates section from option; option names are
//! lowercased, section names are kept as written.

use std::fmt;

use crate::ini::document::normalize_option;

/// Section used for keys written without a section part.
pub const DEFAULT_SECTION: &str = "GENERAL";

/// Options whose name starts with this character are protected: they can be
/// read but only changed by editing the file by hand.
pub const PROTECTED_PREFIX: char = '_';

/// The `(section, option)` address of a single setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingKey {
    section: String,
    option: String,
}

impl SettingKey {
    /// Creates a key for `option` inside `section`.
    pub fn new(section: impl Into<String>, option: &str) -> Self {
        Self {
            section: section.into(),
            option: normalize_option(option),
        }
    }

    /// Creates a key for `option` inside [`DEFAULT_SECTION`].
    pub fn general(option: &str) -> Self {
        Self::new(DEFAULT_SECTION, option)
    }

    /// Parses `section.option` or a bare `option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifig_core::SettingKey;
    ///
    /// let key = SettingKey::parse("network.port");
    /// assert_eq!(key.section(), "network");
    /// assert_eq!(key.option(), "port");
    /// assert_eq!(SettingKey::parse("theme").section(), "GENERAL");
    /// ```
    pub fn parse(text: &str) -> Self {
        match text.trim().split_once('.') {
            Some((section, option)) if !section.trim().is_empty() => {
                Self::new(section.trim(), option)
            }
            Some((_, option)) => Self::general(option),
            None => Self::general(text),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn option(&self) -> &str {
        &self.option
    }

    /// Returns `true` when the option name starts with [`PROTECTED_PREFIX`].
    pub fn is_protected(&self) -> bool {
        self.option.starts_with(PROTECTED_PREFIX)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.section == DEFAULT_SECTION {
            write!(f, "{}", self.option)
        } else {
            write!(f, "{}.{}", self.section, self.option)
        }
    }
}

impl From<&str> for SettingKey {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for SettingKey {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&SettingKey> for SettingKey {
    fn from(key: &SettingKey) -> Self {
        key.clone()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_lands_in_default_section() {
        let key = SettingKey::parse("theme");
        assert_eq!(key.section(), DEFAULT_SECTION);
        assert_eq!(key.option(), "theme");
    }

    #[test]
    fn test_dotted_key_splits_on_first_dot_only() {
        let key = SettingKey::parse("paths.log.dir");
        assert_eq!(key.section(), "paths");
        assert_eq!(key.option(), "log.dir");
    }

    #[test]
    fn test_option_is_lowercased_but_section_is_not() {
        let key = SettingKey::parse("Network.Port");
        assert_eq!(key.section(), "Network");
        assert_eq!(key.option(), "port");
    }

    #[test]
    fn test_leading_dot_means_default_section() {
        let key = SettingKey::parse(".theme");
        assert_eq!(key, SettingKey::general("theme"));
    }

    #[test]
    fn test_display_omits_default_section() {
        assert_eq!(SettingKey::general("theme").to_string(), "theme");
        assert_eq!(SettingKey::new("network", "port").to_string(), "network.port");
    }

    #[test]
    fn test_underscore_prefix_is_protected() {
        assert!(SettingKey::general("_build_id").is_protected());
        assert!(!SettingKey::general("build_id").is_protected());
    }

    #[test]
    fn test_keys_differing_only_in_option_case_are_equal() {
        assert_eq!(SettingKey::general("Theme"), SettingKey::general("theme"));
    }
}
