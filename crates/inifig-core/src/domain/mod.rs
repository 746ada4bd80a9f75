//! Domain types for inifig.
//!
//! These types contain pure setting logic with no file-system dependencies:
//! - [`key::SettingKey`]: the `(section, option)` address of one setting.
//! - [`defaults::Defaults`]: values declared by the embedding application.
//! - [`merge::MergedSettings`]: defaults plus file layers in precedence order.
//! - [`value`]: helpers for reading setting text as typed values.

pub mod defaults;
pub mod key;
pub mod merge;
pub mod value;
