use crate::parsing::blocks::{BlockKind, BlockNode};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The root is a `Document` spanning the input
/// - Every node is closed
/// - Every non-root line range lies within `1..=line_count`
/// - Children sit inside their parent and follow one another in order
/// - Leaves have no children and containers have no raw lines
/// - Lists hold only list items, and list items live only in lists
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(root: &BlockNode, line_count: usize) {
    assert_eq!(
        root.kind,
        BlockKind::Document,
        "root is not a document: {:?}",
        root.kind
    );
    assert_eq!(
        (root.start_line, root.end_line),
        (1, line_count.max(1)),
        "document range does not cover the input"
    );
    check_node(root, line_count);
}

fn check_node(node: &BlockNode, line_count: usize) {
    assert!(!node.open, "node left open: {:?}", node.kind);
    assert!(
        1 <= node.start_line && node.start_line <= node.end_line,
        "bad line range [{}-{}] on {:?}",
        node.start_line,
        node.end_line,
        node.kind
    );
    if node.kind != BlockKind::Document {
        assert!(
            node.end_line <= line_count,
            "{:?} ends on line {} past input end {}",
            node.kind,
            node.end_line,
            line_count
        );
    }

    if node.kind.is_leaf() {
        assert!(
            node.children.is_empty(),
            "leaf {:?} has children",
            node.kind
        );
    } else {
        assert!(
            node.raw_lines.is_empty(),
            "container {:?} has raw lines",
            node.kind
        );
    }

    let mut prev_end: Option<usize> = None;
    for child in &node.children {
        assert!(
            node.kind.can_contain(&child.kind),
            "{:?} holds {:?}",
            node.kind,
            child.kind
        );
        assert!(
            child.start_line >= node.start_line && child.end_line <= node.end_line,
            "{:?} [{}-{}] escapes parent {:?} [{}-{}]",
            child.kind,
            child.start_line,
            child.end_line,
            node.kind,
            node.start_line,
            node.end_line
        );
        if let Some(end) = prev_end {
            assert!(
                child.start_line >= end,
                "{:?} starts on line {} before its sibling ends on line {}",
                child.kind,
                child.start_line,
                end
            );
        }
        prev_end = Some(child.end_line);
        check_node(child, line_count);
    }
}
