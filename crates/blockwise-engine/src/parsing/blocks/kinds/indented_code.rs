use crate::parsing::blocks::line::{CODE_INDENT, LineCursor};

/// Indented code block type.
pub struct IndentedCode;

impl IndentedCode {
    /// Indented code continues on lines indented by [`CODE_INDENT`] columns
    /// (which are stripped) and on blank lines; the builder trims blank
    /// lines left trailing when the block closes.
    pub fn continues(cursor: &mut LineCursor<'_>) -> bool {
        if cursor.is_indented() {
            cursor.advance_offset(CODE_INDENT, true);
            true
        } else if cursor.is_blank() {
            cursor.advance_next_nonspace();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_four_columns() {
        let mut cursor = LineCursor::new("      x");
        assert!(IndentedCode::continues(&mut cursor));
        assert_eq!(cursor.remainder(), "  x");
    }

    #[test]
    fn tab_counts_as_four_columns() {
        let mut cursor = LineCursor::new("\tx");
        assert!(IndentedCode::continues(&mut cursor));
        assert_eq!(cursor.remainder(), "x");
    }

    #[test]
    fn blank_lines_continue() {
        let mut cursor = LineCursor::new("  ");
        assert!(IndentedCode::continues(&mut cursor));
        assert_eq!(cursor.remainder(), "");
    }

    #[test]
    fn shallow_text_ends_block() {
        assert!(!IndentedCode::continues(&mut LineCursor::new("   x")));
    }
}
