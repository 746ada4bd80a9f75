//! INI module containing the ordered document model and the text codec.

pub mod document;
pub mod parser;
pub mod writer;

pub use document::{normalize_option, IniDocument, Section};
pub use parser::{parse_ini, IniError};
pub use writer::{check_option_name, check_section_name, check_value, write_ini, UnwritableText};
