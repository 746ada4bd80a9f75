//! INI text writer.
//!
//! Output layout:
//! ```text
//! [section]
//! key = value
//! empty =
//! multi = first line
//! <TAB>second line
//!
//! ```
//! Every section is followed by one blank line.
//!
//! Not every string survives the trip through INI text: the parser trims
//! whitespace, splits at the first `=` or `:`, drops comment lines and ends a
//! continuation at a blank line.  [`check_section_name`], [`check_option_name`]
//! and [`check_value`] accept exactly the names and values that
//! [`parse_ini`](crate::parse_ini) reads back unchanged from this writer's
//! output, and writing that parsed document again yields the same bytes.

use thiserror::Error;

use crate::ini::document::IniDocument;

/// Reason a name or value cannot be written as INI text that parses back to
/// the same string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnwritableText {
    #[error("name is empty")]
    EmptyName,

    #[error("name has leading or trailing whitespace")]
    PaddedName,

    #[error("name contains a line break")]
    LineBreakInName,

    #[error("name contains '{0}'")]
    ForbiddenChar(char),

    /// Option names are lowercased when read.
    #[error("name contains uppercase letters")]
    UppercaseName,

    /// The option would be read as a comment or a section header.
    #[error("name starts with '{0}'")]
    ForbiddenStart(char),

    #[error("line {line} of the value has leading or trailing whitespace")]
    PaddedLine { line: usize },

    /// A blank inner line would end the value early.
    #[error("line {line} of the value is empty")]
    EmptyLine { line: usize },

    #[error("line {line} of the value would be read as a comment")]
    CommentLine { line: usize },
}

/// Checks that `name` can be written as a `[name]` header.
///
/// # Errors
///
/// Returns the first [`UnwritableText`] problem found.
pub fn check_section_name(name: &str) -> Result<(), UnwritableText> {
    check_name(name)?;
    if name.contains(']') {
        return Err(UnwritableText::ForbiddenChar(']'));
    }
    Ok(())
}

/// Checks that `name` can be written as the left side of `name = value`.
///
/// # Errors
///
/// Returns the first [`UnwritableText`] problem found.
pub fn check_option_name(name: &str) -> Result<(), UnwritableText> {
    check_name(name)?;
    if name.to_lowercase() != name {
        return Err(UnwritableText::UppercaseName);
    }
    if let Some(c) = name.chars().find(|c| matches!(c, '=' | ':')) {
        return Err(UnwritableText::ForbiddenChar(c));
    }
    match name.chars().next() {
        Some(c @ ('#' | ';' | '[')) => Err(UnwritableText::ForbiddenStart(c)),
        _ => Ok(()),
    }
}

/// Checks that `value` parses back unchanged after [`write_ini`].
///
/// Line numbers in the error are 1-based lines of the value itself.
///
/// # Errors
///
/// Returns the first [`UnwritableText`] problem found.
///
/// # Examples
///
/// ```rust
/// use inifig_core::ini::writer::{check_value, UnwritableText};
///
/// assert!(check_value("hello\nworld").is_ok());
/// assert_eq!(
///     check_value("hello\n# world"),
///     Err(UnwritableText::CommentLine { line: 2 })
/// );
/// ```
pub fn check_value(value: &str) -> Result<(), UnwritableText> {
    for (index, text) in value.split('\n').enumerate() {
        let line = index + 1;
        if text.trim() != text {
            return Err(UnwritableText::PaddedLine { line });
        }
        if index == 0 {
            continue;
        }
        if text.is_empty() {
            return Err(UnwritableText::EmptyLine { line });
        }
        if text.starts_with(['#', ';']) {
            return Err(UnwritableText::CommentLine { line });
        }
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), UnwritableText> {
    if name.is_empty() {
        return Err(UnwritableText::EmptyName);
    }
    if name.contains(['\n', '\r']) {
        return Err(UnwritableText::LineBreakInName);
    }
    if name.trim() != name {
        return Err(UnwritableText::PaddedName);
    }
    Ok(())
}

/// Serializes `doc` to INI text.
///
/// Names and values that fail the `check_*` functions are written as they are
/// and will not read back the same.
///
/// # Examples
///
/// ```rust
/// use inifig_core::{write_ini, IniDocument};
///
/// let mut doc = IniDocument::new();
/// doc.set("GENERAL", "theme", "dark");
/// assert_eq!(write_ini(&doc), "[GENERAL]\ntheme = dark\n\n");
/// ```
pub fn write_ini(doc: &IniDocument) -> String {
    let mut out = String::new();

    for (name, section) in doc.sections() {
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");

        for (option, value) in section.iter() {
            out.push_str(option);
            out.push_str(" =");

            let mut lines = value.split('\n');
            if let Some(first) = lines.next() {
                if !first.is_empty() {
                    out.push(' ');
                    out.push_str(first);
                }
            }
            for line in lines {
                out.push_str("\n\t");
                out.push_str(line);
            }
            out.push('\n');
        }

        out.push('\n');
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::parser::parse_ini;

    #[test]
    fn test_write_sections_in_insertion_order() {
        // Arrange
        let mut doc = IniDocument::new();
        doc.set("GENERAL", "theme", "dark");
        doc.set("network", "port", "8080");
        doc.set("GENERAL", "lang", "en");

        // Act
        let text = write_ini(&doc);

        // Assert
        assert_eq!(
            text,
            "[GENERAL]\ntheme = dark\nlang = en\n\n[network]\nport = 8080\n\n"
        );
    }

    #[test]
    fn test_write_empty_value_has_no_trailing_space() {
        let mut doc = IniDocument::new();
        doc.set("GENERAL", "empty", "");

        assert_eq!(write_ini(&doc), "[GENERAL]\nempty =\n\n");
    }

    #[test]
    fn test_write_multiline_value_indents_continuations() {
        let mut doc = IniDocument::new();
        doc.set("GENERAL", "motd", "hello\nworld");

        assert_eq!(write_ini(&doc), "[GENERAL]\nmotd = hello\n\tworld\n\n");
    }

    #[test]
    fn test_write_empty_document_is_empty_string() {
        assert_eq!(write_ini(&IniDocument::new()), "");
    }

    #[test]
    fn test_written_multiline_value_parses_back() {
        // Arrange
        let mut doc = IniDocument::new();
        doc.set("GENERAL", "motd", "hello\nworld");
        doc.set("GENERAL", "after", "x");

        // Act
        let parsed = parse_ini(&write_ini(&doc)).expect("parse");

        // Assert
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_rewriting_hand_edited_text_is_stable() {
        // Arrange: irregular spacing and comments are normalized once...
        let hand_written = "; comment\n[GENERAL]\nTheme=dark\nport :  80\n";
        let first = write_ini(&parse_ini(hand_written).expect("parse"));

        // Act: ...and after that the text no longer changes.
        let second = write_ini(&parse_ini(&first).expect("parse"));

        // Assert
        assert_eq!(first, "[GENERAL]\ntheme = dark\nport = 80\n\n");
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_option_name_rejects_parser_syntax() {
        assert_eq!(check_option_name(""), Err(UnwritableText::EmptyName));
        assert_eq!(check_option_name("a=b"), Err(UnwritableText::ForbiddenChar('=')));
        assert_eq!(check_option_name("a:b"), Err(UnwritableText::ForbiddenChar(':')));
        assert_eq!(check_option_name("#x"), Err(UnwritableText::ForbiddenStart('#')));
        assert_eq!(check_option_name(";x"), Err(UnwritableText::ForbiddenStart(';')));
        assert_eq!(check_option_name("[x"), Err(UnwritableText::ForbiddenStart('[')));
        assert_eq!(check_option_name("a\nb"), Err(UnwritableText::LineBreakInName));
        assert_eq!(check_option_name(" a"), Err(UnwritableText::PaddedName));
        assert_eq!(check_option_name("Theme"), Err(UnwritableText::UppercaseName));
        assert!(check_option_name("font_size").is_ok());
        assert!(check_option_name("a#b").is_ok());
    }

    #[test]
    fn test_check_section_name_rejects_bracket_and_line_break() {
        assert_eq!(check_section_name(""), Err(UnwritableText::EmptyName));
        assert_eq!(check_section_name("a]b"), Err(UnwritableText::ForbiddenChar(']')));
        assert_eq!(check_section_name("a\rb"), Err(UnwritableText::LineBreakInName));
        assert_eq!(check_section_name("net "), Err(UnwritableText::PaddedName));
        assert!(check_section_name("my section.v2").is_ok());
    }

    #[test]
    fn test_check_value_rejects_lines_the_parser_changes() {
        assert_eq!(check_value("  spaced"), Err(UnwritableText::PaddedLine { line: 1 }));
        assert_eq!(check_value("a\nb "), Err(UnwritableText::PaddedLine { line: 2 }));
        assert_eq!(check_value("a\n\nb"), Err(UnwritableText::EmptyLine { line: 2 }));
        assert_eq!(check_value("a\n"), Err(UnwritableText::EmptyLine { line: 2 }));
        assert_eq!(check_value("a\n;b"), Err(UnwritableText::CommentLine { line: 2 }));
    }

    #[test]
    fn test_checked_values_parse_back_unchanged() {
        // Arrange
        let values = ["", "plain", "# not a comment", "a = b: c", "\nsecond", "x\ny\nz"];
        let mut doc = IniDocument::new();
        for (i, value) in values.iter().enumerate() {
            assert!(check_value(value).is_ok(), "{value:?} should be writable");
            doc.set("GENERAL", &format!("k{i}"), *value);
        }

        // Act
        let parsed = parse_ini(&write_ini(&doc)).expect("parse");

        // Assert
        assert_eq!(parsed, doc);
    }
}
