use crate::parsing::blocks::line::LineCursor;

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches, and the only leaf that accepts lazy
/// continuation lines.
pub struct Paragraph;

impl Paragraph {
    /// A paragraph runs until the first blank line.
    pub fn continues(cursor: &LineCursor<'_>) -> bool {
        !cursor.is_blank()
    }
}
