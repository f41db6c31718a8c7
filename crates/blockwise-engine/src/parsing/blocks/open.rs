use super::kinds::{FenceInfo, ListMarkerMatch};

/// A block start recognised on the unconsumed part of a line.
///
/// Candidates come out of the classifier in precedence order; the builder
/// acts on the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockStart {
    /// `>` marker: opens a container, classification continues after it.
    BlockQuote,
    /// `#`-run heading with its trimmed content.
    AtxHeading { level: u8, content: String },
    /// Opening code fence.
    FencedCode(FenceInfo),
    /// `===` / `---` under an open paragraph.
    SetextUnderline { level: u8 },
    ThematicBreak,
    /// List marker: opens a list item container, classification continues
    /// after it.
    ListItem(ListMarkerMatch),
    /// Line indented by four or more columns.
    IndentedCode,
}

/// What the classifier needs to know about the block structure around the
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyContext {
    /// An open paragraph continues on this line. Enables setext underlines
    /// and restricts which starts may interrupt it.
    pub paragraph_continues: bool,
    /// The open leaf is a paragraph, continued or not. Indented code cannot
    /// start while one is open, even lazily.
    pub paragraph_open: bool,
    /// A new block quote fits under the nesting limit.
    pub quote_allowed: bool,
    /// A new list item fits under the nesting limit. Stricter than
    /// `quote_allowed` outside a list, where the item also opens its list.
    pub list_allowed: bool,
}
