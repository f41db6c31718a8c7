pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{ParseError, PatternCompileError};
pub use parsing::{
    DEFAULT_MAX_NESTING, ParseOptions, ParsedDoc,
    blocks::{BlockKind, BlockNode},
    parse_document, parse_document_with, parse_lines, parse_str,
};
