use crate::parsing::blocks::line::LineCursor;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or builder code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Continuation rule for an open quote: the line carries a `>` marker
    /// within three columns of indentation. Consumes the marker on success.
    pub fn continues(cursor: &mut LineCursor<'_>) -> bool {
        if !cursor.is_indented() && cursor.peek_nonspace() == Some(Self::PREFIX) {
            Self::consume_marker(cursor);
            true
        } else {
            false
        }
    }

    /// Moves past `>` and at most one following space (a tab counts for one
    /// column of it).
    pub fn consume_marker(cursor: &mut LineCursor<'_>) {
        cursor.advance_next_nonspace();
        cursor.advance_offset(1, false);
        if matches!(cursor.peek(), Some(' ' | '\t')) {
            cursor.advance_offset(1, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strip(line: &str) -> Option<String> {
        let mut cursor = LineCursor::new(line);
        BlockQuote::continues(&mut cursor).then(|| cursor.remainder())
    }

    #[test]
    fn strip_no_quote() {
        assert_eq!(strip("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(strip("> hello").as_deref(), Some("hello"));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(strip(">hello").as_deref(), Some("hello"));
    }

    #[test]
    fn strip_keeps_nested_marker() {
        assert_eq!(strip("> > hello").as_deref(), Some("> hello"));
    }

    #[test]
    fn strip_indented_marker() {
        assert_eq!(strip("   > hello").as_deref(), Some("hello"));
        assert_eq!(strip("    > hello"), None);
    }

    #[test]
    fn tab_after_marker_is_one_column() {
        assert_eq!(strip(">\tfoo").as_deref(), Some("  foo"));
    }
}
