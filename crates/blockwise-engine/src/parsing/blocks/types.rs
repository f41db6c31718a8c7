use serde::Serialize;

use super::kinds::{FenceInfo, ListMarker, MarkerKind};

/// Every block the engine recognises. Containers own child blocks, leaves
/// own raw text lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// The root container.
    Document,
    /// `>` container.
    BlockQuote,
    /// Sequence of list items sharing a bullet character or delimiter.
    List {
        /// Marker of the first item (its number is the list's start).
        kind: MarkerKind,
        /// Decided when the list closes.
        tight: bool,
    },
    /// A single list item container.
    ListItem(ListMarker),
    /// ATX heading, `level` 1-6.
    Heading { level: u8 },
    /// Paragraph turned into a heading by a following `===` / `---` line.
    SetextHeading { level: u8 },
    FencedCode(FenceInfo),
    IndentedCode,
    Paragraph,
    ThematicBreak,
}

impl BlockKind {
    /// Whether this kind owns child blocks rather than text.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            BlockKind::Document
                | BlockKind::BlockQuote
                | BlockKind::List { .. }
                | BlockKind::ListItem(_)
        )
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    /// A list holds only items, and items live only in lists.
    pub fn can_contain(&self, child: &BlockKind) -> bool {
        match self {
            BlockKind::List { .. } => matches!(child, BlockKind::ListItem(_)),
            BlockKind::Document | BlockKind::BlockQuote | BlockKind::ListItem(_) => {
                !matches!(child, BlockKind::ListItem(_))
            }
            _ => false,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, BlockKind::FencedCode(_) | BlockKind::IndentedCode)
    }
}

/// A finished block with its children (containers) or raw lines (leaves).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub kind: BlockKind,
    pub children: Vec<BlockNode>,
    /// Content lines with container prefixes removed, for inline parsing.
    pub raw_lines: Vec<String>,
    /// Still accepting lines. Always `false` in a finished tree.
    pub open: bool,
    /// 1-based, inclusive.
    pub start_line: usize,
    /// 1-based, inclusive.
    pub end_line: usize,
}

impl BlockNode {
    /// Raw lines joined with `\n`.
    #[must_use]
    pub fn content(&self) -> String {
        self.raw_lines.join("\n")
    }

    /// Every node of the subtree in document order, this one first.
    pub fn walk(&self) -> impl Iterator<Item = &BlockNode> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
