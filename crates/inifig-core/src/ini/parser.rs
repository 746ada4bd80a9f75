//! INI text parser.
//!
//! Accepted syntax:
//! ```text
//! ; full-line comment        # also a comment
//! [section]
//! key = value
//! other: value               ; `:` works as a delimiter too
//! multi = first line
//!     second line            <- indented lines continue the previous value
//! ```
//!
//! Option names are lowercased.  A section header may appear only once per
//! file and an option only once per section; both rules are enforced so that a
//! typo in a hand-edited file is reported instead of silently shadowing an
//! earlier line.

use std::collections::HashSet;

use thiserror::Error;

use crate::ini::document::{normalize_option, IniDocument};

/// Errors produced while parsing INI text.  Every variant carries the
/// 1-based line number of the offending line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IniError {
    /// An option appeared before the first `[section]` header.
    #[error("line {line}: option outside of any section")]
    MissingSectionHeader { line: usize },

    /// A `[]` header with nothing inside.
    #[error("line {line}: empty section name")]
    EmptySectionName { line: usize },

    /// The same `[section]` header appeared twice in one file.
    #[error("line {line}: section [{name}] already defined")]
    DuplicateSection { line: usize, name: String },

    /// The same option appeared twice in one section of one file.
    #[error("line {line}: option '{key}' already defined in section [{section}]")]
    DuplicateOption {
        line: usize,
        section: String,
        key: String,
    },

    /// A non-comment line with neither `=` nor `:`.
    #[error("line {line}: expected `key = value`, found '{content}'")]
    MissingDelimiter { line: usize, content: String },

    /// A line such as `= value` with no option name.
    #[error("line {line}: empty option name")]
    EmptyKey { line: usize },
}

/// Parses INI `text` into an [`IniDocument`].
///
/// # Errors
///
/// Returns [`IniError`] describing the first malformed line.
///
/// # Examples
///
/// ```rust
/// use inifig_core::parse_ini;
///
/// let doc = parse_ini("[GENERAL]\ntheme = dark\n").unwrap();
/// assert_eq!(doc.get("GENERAL", "theme"), Some("dark"));
/// ```
pub fn parse_ini(text: &str) -> Result<IniDocument, IniError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut doc = IniDocument::new();
    let mut seen_sections: HashSet<String> = HashSet::new();
    let mut current_section: Option<String> = None;
    // Option that an indented line would continue.
    let mut continuing: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            continuing = None;
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let indented = raw.starts_with([' ', '\t']);
        if indented {
            if let (Some(section), Some(option)) = (&current_section, &continuing) {
                let target = doc.section_mut(section);
                let mut value = target.get(option).unwrap_or_default().to_string();
                value.push('\n');
                value.push_str(trimmed);
                target.set(option, value);
                continue;
            }
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let name = trimmed[1..trimmed.len() - 1].trim();
            if name.is_empty() {
                return Err(IniError::EmptySectionName { line });
            }
            if !seen_sections.insert(name.to_string()) {
                return Err(IniError::DuplicateSection {
                    line,
                    name: name.to_string(),
                });
            }
            doc.section_mut(name);
            current_section = Some(name.to_string());
            continuing = None;
            continue;
        }

        let Some(pos) = trimmed.find(['=', ':']) else {
            return Err(IniError::MissingDelimiter {
                line,
                content: trimmed.to_string(),
            });
        };
        let key = normalize_option(&trimmed[..pos]);
        if key.is_empty() {
            return Err(IniError::EmptyKey { line });
        }
        let value = trimmed[pos + 1..].trim();

        let section = current_section
            .as_deref()
            .ok_or(IniError::MissingSectionHeader { line })?;
        let target = doc.section_mut(section);
        if target.contains(&key) {
            return Err(IniError::DuplicateOption {
                line,
                section: section.to_string(),
                key,
            });
        }
        target.set(&key, value);
        continuing = Some(key);
    }

    Ok(doc)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_sections_and_options() {
        // Arrange
        let text = "[GENERAL]\ntheme = dark\nlang=en\n\n[network]\nport: 8080\n";

        // Act
        let doc = parse_ini(text).expect("parse");

        // Assert
        assert_eq!(doc.get("GENERAL", "theme"), Some("dark"));
        assert_eq!(doc.get("GENERAL", "lang"), Some("en"));
        assert_eq!(doc.get("network", "port"), Some("8080"));
    }

    #[test]
    fn test_parse_lowercases_option_names() {
        let doc = parse_ini("[GENERAL]\nTheme = Dark\n").expect("parse");

        let (key, value) = doc.section("GENERAL").unwrap().iter().next().unwrap();
        assert_eq!(key, "theme");
        // Values keep their case
        assert_eq!(value, "Dark");
    }

    #[test]
    fn test_parse_ignores_comments_and_blank_lines() {
        let text = "# top comment\n; another\n\n[GENERAL]\n  # indented comment\nkey = v\n";

        let doc = parse_ini(text).expect("parse");

        assert_eq!(doc.option_count(), 1);
        assert_eq!(doc.get("GENERAL", "key"), Some("v"));
    }

    #[test]
    fn test_parse_keeps_semicolon_inside_value() {
        let doc = parse_ini("[GENERAL]\nlist = a; b\n").expect("parse");
        assert_eq!(doc.get("GENERAL", "list"), Some("a; b"));
    }

    #[test]
    fn test_parse_splits_on_first_delimiter() {
        let doc = parse_ini("[GENERAL]\nurl = http://host:80/a=b\n").expect("parse");
        assert_eq!(doc.get("GENERAL", "url"), Some("http://host:80/a=b"));
    }

    #[test]
    fn test_parse_empty_value() {
        let doc = parse_ini("[GENERAL]\nempty =\n").expect("parse");
        assert_eq!(doc.get("GENERAL", "empty"), Some(""));
    }

    #[test]
    fn test_parse_continuation_lines_join_with_newline() {
        // Arrange
        let text = "[GENERAL]\nmotd = hello\n    world\n\tagain\nnext = 1\n";

        // Act
        let doc = parse_ini(text).expect("parse");

        // Assert
        assert_eq!(doc.get("GENERAL", "motd"), Some("hello\nworld\nagain"));
        assert_eq!(doc.get("GENERAL", "next"), Some("1"));
    }

    #[test]
    fn test_blank_line_ends_continuation() {
        let text = "[GENERAL]\na = 1\n\n  b = 2\n";

        let doc = parse_ini(text).expect("parse");

        assert_eq!(doc.get("GENERAL", "a"), Some("1"));
        assert_eq!(doc.get("GENERAL", "b"), Some("2"));
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let doc = parse_ini("\u{feff}[GENERAL]\nk = v\n").expect("parse");
        assert_eq!(doc.get("GENERAL", "k"), Some("v"));
    }

    #[test]
    fn test_parse_keeps_empty_sections() {
        let doc = parse_ini("[empty]\n[GENERAL]\nk = v\n").expect("parse");
        assert!(doc.has_section("empty"));
    }

    #[test]
    fn test_parse_empty_text_gives_empty_document() {
        let doc = parse_ini("").expect("parse");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_option_before_section_is_rejected() {
        let result = parse_ini("key = value\n[GENERAL]\n");
        assert_eq!(result, Err(IniError::MissingSectionHeader { line: 1 }));
    }

    #[test]
    fn test_line_without_delimiter_is_rejected() {
        let result = parse_ini("[GENERAL]\nnot an option\n");
        assert_eq!(
            result,
            Err(IniError::MissingDelimiter {
                line: 2,
                content: "not an option".to_string()
            })
        );
    }

    #[test]
    fn test_empty_section_name_is_rejected() {
        assert_eq!(
            parse_ini("[  ]\n"),
            Err(IniError::EmptySectionName { line: 1 })
        );
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert_eq!(
            parse_ini("[GENERAL]\n = value\n"),
            Err(IniError::EmptyKey { line: 2 })
        );
    }

    #[test]
    fn test_duplicate_section_is_rejected() {
        let result = parse_ini("[a]\nk = 1\n[b]\n[a]\n");
        assert_eq!(
            result,
            Err(IniError::DuplicateSection {
                line: 4,
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_option_is_rejected_case_insensitively() {
        let result = parse_ini("[GENERAL]\nTheme = a\ntheme = b\n");
        assert_eq!(
            result,
            Err(IniError::DuplicateOption {
                line: 3,
                section: "GENERAL".to_string(),
                key: "theme".to_string()
            })
        );
    }

    #[test]
    fn test_error_message_includes_line_number() {
        let err = parse_ini("[GENERAL]\n\n???\n").unwrap_err();
        assert!(err.to_string().starts_with("line 3:"), "got: {err}");
    }
}
