/// A static line matcher failed to compile.
///
/// The engine cannot run without its fixed pattern set, so this is an
/// initialization failure rather than a per-document error. It is `Clone`
/// because the lazily built matcher table hands the same failure to every
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to compile {name} pattern `{pattern}`: {message}")]
pub struct PatternCompileError {
    /// Which matcher failed (e.g. `"atx_heading"`).
    pub name: &'static str,
    /// The pattern source.
    pub pattern: String,
    /// The regex engine's diagnostic.
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Pattern(#[from] PatternCompileError),
    /// The container stack or node arena became inconsistent. This is an
    /// engine bug, never a property of the input.
    #[error("block tree invariant violated at line {line}: {message}")]
    Invariant { line: usize, message: String },
}

impl ParseError {
    pub(crate) fn invariant(line: usize, message: impl Into<String>) -> Self {
        ParseError::Invariant {
            line,
            message: message.into(),
        }
    }
}
