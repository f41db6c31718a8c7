//! Node arena for the tree under construction.
//!
//! Nodes are referenced by [`NodeId`] while parsing so the container stack
//! can point into the tree without owning it. The finished tree is moved
//! out of the arena in one pass.

use crate::error::ParseError;

use super::content::PendingContentBuffer;
use super::types::{BlockKind, BlockNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
pub struct ArenaNode {
    pub kind: BlockKind,
    pub children: Vec<NodeId>,
    pub pending: PendingContentBuffer,
    pub raw_lines: Vec<String>,
    pub open: bool,
    pub start_line: usize,
    pub end_line: usize,
}

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Option<ArenaNode>>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an open node starting (and for now ending) at `line`.
    pub fn alloc(&mut self, kind: BlockKind, line: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(ArenaNode {
            kind,
            children: Vec::new(),
            pending: PendingContentBuffer::new(),
            raw_lines: Vec::new(),
            open: true,
            start_line: line,
            end_line: line,
        }));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&ArenaNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ArenaNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Moves the subtree rooted at `root` out of the arena.
    ///
    /// Fails if a node is referenced twice or is missing, which means the
    /// builder corrupted the tree.
    pub fn into_tree(mut self, root: NodeId) -> Result<BlockNode, ParseError> {
        self.take(root)
    }

    fn take(&mut self, id: NodeId) -> Result<BlockNode, ParseError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or_else(|| {
                ParseError::invariant(0, format!("node {id:?} missing or shared in arena"))
            })?;
        let children = node
            .children
            .into_iter()
            .map(|child| self.take(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BlockNode {
            kind: node.kind,
            children,
            raw_lines: node.raw_lines,
            open: node.open,
            start_line: node.start_line,
            end_line: node.end_line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn into_tree_preserves_child_order() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(BlockKind::Document, 1);
        let a = arena.alloc(BlockKind::Paragraph, 1);
        let b = arena.alloc(BlockKind::ThematicBreak, 2);
        arena.get_mut(root).unwrap().children.extend([a, b]);

        let tree = arena.into_tree(root).unwrap();
        let kinds: Vec<BlockKind> = tree.children.into_iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Paragraph, BlockKind::ThematicBreak]);
    }

    #[test]
    fn shared_child_is_an_invariant_violation() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(BlockKind::Document, 1);
        let a = arena.alloc(BlockKind::Paragraph, 1);
        arena.get_mut(root).unwrap().children.extend([a, a]);

        assert!(matches!(
            arena.into_tree(root),
            Err(ParseError::Invariant { .. })
        ));
    }
}
