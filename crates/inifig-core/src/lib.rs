//! # inifig-core
//!
//! Shared library for inifig containing the INI text codec, the setting key
//! and defaults types, and the layered merge policy.
//!
//! This crate performs no file-system access.  Reading and writing files is
//! the job of the `inifig` crate's infrastructure layer; everything here
//! works on strings and in-memory documents so it can be tested directly.
//!
//! # Architecture overview (for beginners)
//!
//! inifig lets an application declare default settings, load them from one
//! or more INI files (later files override earlier ones), and save changes
//! back to the last file.  This crate is the pure foundation:
//!
//! - **`ini`** – How settings look on disk.  [`parse_ini`] turns INI text into
//!   an ordered [`IniDocument`]; [`write_ini`] turns it back into text.
//!
//! - **`domain`** – What a setting *is*.  A [`SettingKey`] names one option in
//!   one section, [`Defaults`] holds the values declared by the embedding
//!   application, and [`MergedSettings`] applies defaults and file layers in
//!   precedence order while remembering each value's [`Origin`].

pub mod domain;
pub mod ini;

// Re-export the most-used types at the crate root so callers can write
// `inifig_core::SettingKey` instead of `inifig_core::domain::key::SettingKey`.
pub use domain::defaults::{Defaults, DefaultsError};
pub use domain::key::{SettingKey, DEFAULT_SECTION, PROTECTED_PREFIX};
pub use domain::merge::{merge_layers, MergedSettings, Origin};
pub use domain::value::parse_flag;
pub use ini::document::{IniDocument, Section};
pub use ini::parser::{parse_ini, IniError};
pub use ini::writer::{
    check_option_name, check_section_name, check_value, write_ini, UnwritableText,
};
