//! inifig library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod application;
pub mod infrastructure;

pub use application::file_list::FileList;
pub use application::settings_store::{Settings, SettingsError};
pub use inifig_core::{Defaults, IniDocument, Origin, SettingKey};
