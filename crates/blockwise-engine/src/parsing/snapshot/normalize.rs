use std::fmt;

use serde::Serialize;

use crate::parsing::blocks::{BlockKind, BlockNode, MarkerKind};

/// Stable, printable view of a block tree.
///
/// Used by the fixture snapshots and by the command-line front end. The
/// `Display` impl renders the outline format:
///
/// ```text
/// Document [1-3]
///   Heading(1) [1-1]
///     | Title
///   Paragraph [3-3]
///     | Some text
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snap {
    /// Block kind with its payload (e.g. `"List(bullet -, tight)"`).
    pub kind: String,
    /// 1-based inclusive line range.
    pub lines: (usize, usize),
    /// Raw lines of a leaf.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Snap>,
}

pub fn normalize(root: &BlockNode) -> Snap {
    normalize_with_preview(root, None)
}

/// Like [`normalize`], cutting raw lines longer than `width` characters
/// and marking the cut with `…`.
pub fn normalize_with_preview(node: &BlockNode, width: Option<usize>) -> Snap {
    let text = node
        .raw_lines
        .iter()
        .map(|line| match width {
            Some(w) if line.chars().count() > w => {
                let mut cut: String = line.chars().take(w).collect();
                cut.push('…');
                cut
            }
            _ => line.clone(),
        })
        .collect();
    Snap {
        kind: kind_label(&node.kind),
        lines: (node.start_line, node.end_line),
        text,
        children: node
            .children
            .iter()
            .map(|child| normalize_with_preview(child, width))
            .collect(),
    }
}

fn marker_label(kind: &MarkerKind) -> String {
    match kind {
        MarkerKind::Bullet(c) => format!("bullet {c}"),
        MarkerKind::Ordered { start, delimiter } => {
            format!("ordered {start}{}", delimiter.as_char())
        }
    }
}

fn kind_label(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Document => "Document".to_string(),
        BlockKind::BlockQuote => "BlockQuote".to_string(),
        BlockKind::List { kind, tight } => format!(
            "List({}, {})",
            marker_label(kind),
            if *tight { "tight" } else { "loose" }
        ),
        BlockKind::ListItem(marker) => format!(
            "ListItem({}, offset {}, width {})",
            marker_label(&marker.kind),
            marker.marker_offset,
            marker.marker_width
        ),
        BlockKind::Heading { level } => format!("Heading({level})"),
        BlockKind::SetextHeading { level } => format!("SetextHeading({level})"),
        BlockKind::FencedCode(info) => {
            let fence: String = std::iter::repeat_n(info.fence_char, info.fence_length).collect();
            if info.info_string.is_empty() {
                format!("FencedCode({fence})")
            } else {
                format!("FencedCode({fence} {})", info.info_string)
            }
        }
        BlockKind::IndentedCode => "IndentedCode".to_string(),
        BlockKind::Paragraph => "Paragraph".to_string(),
        BlockKind::ThematicBreak => "ThematicBreak".to_string(),
    }
}

impl Snap {
    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        writeln!(f, "{pad}{} [{}-{}]", self.kind, self.lines.0, self.lines.1)?;
        for line in &self.text {
            if line.is_empty() {
                writeln!(f, "{pad}  |")?;
            } else {
                writeln!(f, "{pad}  | {line}")?;
            }
        }
        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}
