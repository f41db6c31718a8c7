use xi_rope::Rope;

/// A single input line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// 1-based line number in the source.
    pub number: usize,
    /// The line text with its line ending removed.
    pub text: String,
}

impl LineRef {
    /// Builds a line, stripping a trailing `\n` / `\r\n` and replacing NUL
    /// characters with U+FFFD.
    pub fn new(number: usize, raw: &str) -> Self {
        let trimmed = raw
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(raw);
        let text = if trimmed.contains('\0') {
            trimmed.replace('\0', "\u{FFFD}")
        } else {
            trimmed.to_string()
        };
        Self { number, text }
    }
}

/// Returns an iterator over the rope's lines, numbered from 1.
///
/// Uses `lines_raw` so a trailing newline does not produce an extra empty
/// line, matching how CommonMark counts lines.
pub fn lines_with_numbers(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    rope.lines_raw(..)
        .enumerate()
        .map(|(idx, line)| LineRef::new(idx + 1, &line))
}
