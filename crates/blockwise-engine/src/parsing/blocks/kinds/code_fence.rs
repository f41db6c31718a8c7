use serde::Serialize;

use crate::parsing::blocks::line::LineCursor;

/// Opening fence of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FenceInfo {
    /// `` ` `` or `~`.
    pub fence_char: char,
    /// Length of the opening run; the closing run must be at least as long.
    pub fence_length: usize,
    /// Text after the opening run, trimmed. Opaque to this engine.
    pub info_string: String,
    /// Indentation of the opening fence, removed from content lines.
    pub indent: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';

    /// Builds fence info from the fence-start pattern's captures.
    ///
    /// Returns `None` for a backtick fence whose info string contains a
    /// backtick: that line is inline code, not a fence.
    pub fn from_parts(run: &str, info: Option<&str>, indent: usize) -> Option<FenceInfo> {
        let fence_char = run.chars().next()?;
        let info_string = info.map(str::trim).unwrap_or_default().to_string();
        if fence_char == Self::BACKTICK && info_string.contains(Self::BACKTICK) {
            return None;
        }
        Some(FenceInfo {
            fence_char,
            fence_length: run.chars().count(),
            info_string,
            indent,
        })
    }

    /// Skips up to `indent` spaces of a content line so content aligns with
    /// the opening fence.
    pub fn strip_indent(cursor: &mut LineCursor<'_>, indent: usize) {
        let mut remaining = indent;
        while remaining > 0 && matches!(cursor.peek(), Some(' ' | '\t')) {
            cursor.advance_offset(1, true);
            remaining -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn backtick_fence_with_info() {
        let info = CodeFence::from_parts("```", Some("rust"), 0).unwrap();
        assert_eq!(info.fence_char, '`');
        assert_eq!(info.fence_length, 3);
        assert_eq!(info.info_string, "rust");
    }

    #[test]
    fn tilde_fence_without_info() {
        let info = CodeFence::from_parts("~~~~~", None, 2).unwrap();
        assert_eq!(info.fence_char, '~');
        assert_eq!(info.fence_length, 5);
        assert_eq!(info.info_string, "");
        assert_eq!(info.indent, 2);
    }

    #[test]
    fn backtick_in_info_is_not_a_fence() {
        assert_eq!(CodeFence::from_parts("```", Some("a`b"), 0), None);
    }

    #[test]
    fn tilde_fence_allows_backticks_in_info() {
        let info = CodeFence::from_parts("~~~", Some("a`b"), 0).unwrap();
        assert_eq!(info.info_string, "a`b");
    }

    #[test]
    fn strip_indent_stops_at_content() {
        let mut cursor = LineCursor::new("  code");
        CodeFence::strip_indent(&mut cursor, 3);
        assert_eq!(cursor.remainder(), "code");

        let mut cursor = LineCursor::new("     code");
        CodeFence::strip_indent(&mut cursor, 2);
        assert_eq!(cursor.remainder(), "   code");
    }
}
