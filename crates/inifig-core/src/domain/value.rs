//! Helpers for reading setting text as typed values.
//!
//! INI files only store text.  Numbers parse naturally through `FromStr`, but
//! booleans are commonly written in several spellings, so [`parse_flag`]
//! accepts all of them.

/// Interprets `text` as a boolean.
///
/// | Accepted (case-insensitive)   | Result  |
/// |-------------------------------|---------|
/// | `1`, `yes`, `true`, `on`      | `true`  |
/// | `0`, `no`, `false`, `off`     | `false` |
///
/// Returns `None` for anything else.
pub fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
