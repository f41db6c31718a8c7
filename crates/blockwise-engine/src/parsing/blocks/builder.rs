use crate::error::ParseError;
use crate::parsing::ParseOptions;
use crate::parsing::rope::LineRef;

use super::{
    arena::{ArenaNode, NodeArena, NodeId},
    classify::LineClassifier,
    containers::ContainerStack,
    kinds::{BlockQuote, CodeFence, IndentedCode, ListMarker, Paragraph},
    line::{CODE_INDENT, LineCursor},
    matchers::ClosingFence,
    open::{BlockStart, ClassifyContext},
    types::{BlockKind, BlockNode},
};

/// What happens to the rest of a line after block starts are exhausted.
enum Tail {
    /// A leaf start took the whole line.
    Consumed,
    /// Remaining text goes to this leaf, or to a paragraph if `None`.
    Text(Option<NodeId>),
}

/// Drives block construction one line at a time.
///
/// Containers are matched outer to inner, then the open leaf gets a chance
/// to continue, then new block starts are tried on whatever is left of the
/// line. Closed nodes never change again.
pub struct BlockBuilder {
    arena: NodeArena,
    root: NodeId,
    stack: ContainerStack,
    classifier: LineClassifier,
    options: ParseOptions,
    /// Set while a fenced code block is the open leaf.
    closing_fence: Option<ClosingFence>,
    /// Number of the line being processed (last line once input ends).
    line: usize,
}

impl BlockBuilder {
    pub fn new(options: ParseOptions) -> Result<Self, ParseError> {
        let mut arena = NodeArena::new();
        let root = arena.alloc(BlockKind::Document, 1);
        Ok(Self {
            arena,
            root,
            stack: ContainerStack::new(root),
            classifier: LineClassifier::new()?,
            options,
            closing_fence: None,
            line: 0,
        })
    }

    pub fn push(&mut self, line: &LineRef) -> Result<(), ParseError> {
        self.line = line.number;
        let mut cursor = LineCursor::new(&line.text);

        let matched = self.match_containers(&mut cursor)?;
        let all_matched = matched == self.stack.len();
        let open_leaf = self.open_leaf()?;
        let leaf_kind = match open_leaf {
            Some(id) => Some(self.node(id)?.kind.clone()),
            None => None,
        };

        let mut leaf_matched = false;
        if all_matched && let Some(leaf) = open_leaf {
            match &leaf_kind {
                Some(BlockKind::FencedCode(info)) => {
                    if self.closes_fence(&cursor) {
                        self.finalize(leaf, self.line)?;
                        return Ok(());
                    }
                    CodeFence::strip_indent(&mut cursor, info.indent);
                    leaf_matched = true;
                }
                Some(BlockKind::IndentedCode) => {
                    leaf_matched = IndentedCode::continues(&mut cursor);
                }
                Some(BlockKind::Paragraph) => {
                    leaf_matched = Paragraph::continues(&cursor);
                }
                _ => {}
            }
        }

        let paragraph_open = matches!(leaf_kind, Some(BlockKind::Paragraph));
        let code_continues = leaf_matched && leaf_kind.as_ref().is_some_and(BlockKind::is_code);
        let unmatched_leaf = if leaf_matched { None } else { open_leaf };
        let mut all_closed = all_matched && unmatched_leaf.is_none();
        let mut tail = Tail::Text(if leaf_matched { open_leaf } else { None });

        if !code_continues {
            let mut paragraph_continues = leaf_matched && paragraph_open;
            let mut paragraph_open = paragraph_open;
            loop {
                cursor.find_next_nonspace();
                let depth = if all_closed { self.stack.len() } else { matched };
                let room = self.options.max_nesting.saturating_sub(depth);
                // Outside a list, an item pushes its new list as well.
                let item_cost = if self.is_list_at(depth)? { 1 } else { 2 };
                let ctx = ClassifyContext {
                    paragraph_continues,
                    paragraph_open,
                    quote_allowed: room >= 1,
                    list_allowed: room >= item_cost,
                };
                let Some(start) = self.classifier.classify(&cursor, ctx).into_iter().next() else {
                    break;
                };

                if !all_closed {
                    self.close_unmatched(matched, unmatched_leaf)?;
                    all_closed = true;
                }

                match start {
                    BlockStart::BlockQuote => {
                        BlockQuote::consume_marker(&mut cursor);
                        let id = self.add_child(BlockKind::BlockQuote)?;
                        self.stack.push(id);
                    }
                    BlockStart::ListItem(found) => {
                        let marker = ListMarker::consume(&mut cursor, found);
                        self.open_list_item(marker)?;
                    }
                    BlockStart::AtxHeading { level, content } => {
                        let id = self.add_child(BlockKind::Heading { level })?;
                        self.push_content(id, content)?;
                        self.finalize(id, self.line)?;
                        tail = Tail::Consumed;
                        break;
                    }
                    BlockStart::FencedCode(info) => {
                        let closing = ClosingFence::new(info.fence_char, info.fence_length)?;
                        self.add_child(BlockKind::FencedCode(info))?;
                        self.closing_fence = Some(closing);
                        tail = Tail::Consumed;
                        break;
                    }
                    BlockStart::SetextUnderline { level } => {
                        let leaf = open_leaf.ok_or_else(|| {
                            ParseError::invariant(self.line, "setext underline without a paragraph")
                        })?;
                        self.node_mut(leaf)?.kind = BlockKind::SetextHeading { level };
                        self.finalize(leaf, self.line)?;
                        tail = Tail::Consumed;
                        break;
                    }
                    BlockStart::ThematicBreak => {
                        let id = self.add_child(BlockKind::ThematicBreak)?;
                        self.finalize(id, self.line)?;
                        tail = Tail::Consumed;
                        break;
                    }
                    BlockStart::IndentedCode => {
                        cursor.advance_offset(CODE_INDENT, true);
                        let id = self.add_child(BlockKind::IndentedCode)?;
                        tail = Tail::Text(Some(id));
                        break;
                    }
                }

                // A container opened; the paragraph (if any) is closed now.
                paragraph_continues = false;
                paragraph_open = false;
                tail = Tail::Text(None);
            }
        }

        let Tail::Text(target) = tail else {
            return Ok(());
        };

        if !all_closed && !cursor.is_blank() && paragraph_open {
            if let Some(leaf) = open_leaf {
                log::trace!("line {}: lazy continuation", self.line);
                cursor.advance_next_nonspace();
                self.push_content(leaf, cursor.remainder())?;
            }
            return Ok(());
        }

        if !all_closed {
            self.close_unmatched(matched, unmatched_leaf)?;
        }

        match target {
            Some(id) => {
                if matches!(self.node(id)?.kind, BlockKind::Paragraph) {
                    cursor.advance_next_nonspace();
                }
                self.push_content(id, cursor.remainder())?;
            }
            None if !cursor.is_blank() => {
                let id = self.add_child(BlockKind::Paragraph)?;
                cursor.advance_next_nonspace();
                self.push_content(id, cursor.remainder())?;
            }
            None => {}
        }
        Ok(())
    }

    /// Closes everything still open at end of input and hands back the tree.
    pub fn finish(mut self) -> Result<BlockNode, ParseError> {
        let end = self.line;
        if let Some(leaf) = self.open_leaf()? {
            self.finalize(leaf, end)?;
        }
        while let Some(id) = self.stack.pop() {
            self.finalize(id, end)?;
        }
        self.arena.into_tree(self.root)
    }

    /// Runs each open container's continuation rule against the line and
    /// returns how many stack entries (root included) matched.
    fn match_containers(&self, cursor: &mut LineCursor<'_>) -> Result<usize, ParseError> {
        let mut matched = 1;
        while let Some(id) = self.stack.get(matched) {
            let node = self.node(id)?;
            let continues = match &node.kind {
                BlockKind::List { .. } => true,
                BlockKind::BlockQuote => BlockQuote::continues(cursor),
                BlockKind::ListItem(marker) => marker.continues(cursor, !node.children.is_empty()),
                other => {
                    return Err(ParseError::invariant(
                        self.line,
                        format!("{other:?} on the container stack"),
                    ));
                }
            };
            if !continues {
                break;
            }
            cursor.find_next_nonspace();
            matched += 1;
        }
        log::trace!(
            "line {}: {matched} of {} containers matched",
            self.line,
            self.stack.len()
        );
        Ok(matched)
    }

    /// Whether the innermost of the first `depth` stack entries is a list.
    fn is_list_at(&self, depth: usize) -> Result<bool, ParseError> {
        match depth.checked_sub(1).and_then(|i| self.stack.get(i)) {
            Some(id) => Ok(matches!(self.node(id)?.kind, BlockKind::List { .. })),
            None => Ok(false),
        }
    }

    fn closes_fence(&self, cursor: &LineCursor<'_>) -> bool {
        !cursor.is_indented()
            && self
                .closing_fence
                .as_ref()
                .is_some_and(|fence| fence.is_match(&cursor.normalized()))
    }

    /// The innermost container's last child, if it is a leaf still open.
    fn open_leaf(&self) -> Result<Option<NodeId>, ParseError> {
        let top = self.top()?;
        let leaf = self.node(top)?.children.last().copied().filter(|&child| {
            self.arena
                .get(child)
                .is_some_and(|n| n.open && n.kind.is_leaf())
        });
        Ok(leaf)
    }

    /// Closes the open leaf if it failed to continue, then every container
    /// deeper than `matched`. They all end on the previous line.
    fn close_unmatched(&mut self, matched: usize, leaf: Option<NodeId>) -> Result<(), ParseError> {
        let end = self.line.saturating_sub(1);
        if let Some(leaf) = leaf {
            self.finalize(leaf, end)?;
        }
        while self.stack.len() > matched {
            if let Some(id) = self.stack.pop() {
                self.finalize(id, end)?;
            }
        }
        Ok(())
    }

    /// Appends a new open node under the innermost container that can hold
    /// it, closing the open leaf and any containers that cannot.
    fn add_child(&mut self, kind: BlockKind) -> Result<NodeId, ParseError> {
        let end = self.line.saturating_sub(1);
        if let Some(leaf) = self.open_leaf()? {
            self.finalize(leaf, end)?;
        }
        loop {
            let top = self.top()?;
            if self.node(top)?.kind.can_contain(&kind) {
                break;
            }
            if self.stack.len() == 1 {
                return Err(ParseError::invariant(
                    self.line,
                    format!("document cannot hold {kind:?}"),
                ));
            }
            self.stack.pop();
            self.finalize(top, end)?;
        }

        let parent = self.top()?;
        log::debug!("open {kind:?} at line {}", self.line);
        let id = self.arena.alloc(kind, self.line);
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Adds a list item, reusing the innermost list when the marker
    /// belongs to it.
    fn open_list_item(&mut self, marker: ListMarker) -> Result<(), ParseError> {
        let top = self.top()?;
        let same_list = matches!(
            &self.node(top)?.kind,
            BlockKind::List { kind, .. } if kind.same_list(&marker.kind)
        );
        if !same_list {
            let list = self.add_child(BlockKind::List {
                kind: marker.kind,
                tight: true,
            })?;
            self.stack.push(list);
        }
        let item = self.add_child(BlockKind::ListItem(marker))?;
        self.stack.push(item);
        Ok(())
    }

    /// Closes `id` at line `end`, applying the per-kind closing rules, and
    /// moves its pending content into `raw_lines`.
    fn finalize(&mut self, id: NodeId, end: usize) -> Result<(), ParseError> {
        let child_end = self.last_child_end(id)?;
        let tight = self.list_tightness(id)?;

        let node = self.node_mut(id)?;
        node.open = false;
        node.end_line = end.max(node.start_line);
        let mut clears_fence = false;
        match &mut node.kind {
            BlockKind::IndentedCode => {
                node.pending.trim_trailing_blank();
                node.end_line = node.start_line + node.pending.len().saturating_sub(1);
            }
            BlockKind::ListItem(_) => {
                node.end_line = child_end.unwrap_or(node.start_line);
            }
            BlockKind::List { tight: flag, .. } => {
                node.end_line = child_end.unwrap_or(node.start_line);
                *flag = tight.unwrap_or(true);
            }
            BlockKind::FencedCode(_) => clears_fence = true,
            _ => {}
        }
        node.raw_lines = node.pending.flush();
        log::debug!(
            "close {:?} [{}-{}]",
            node.kind,
            node.start_line,
            node.end_line
        );

        if clears_fence {
            self.closing_fence = None;
        }
        Ok(())
    }

    fn last_child_end(&self, id: NodeId) -> Result<Option<usize>, ParseError> {
        match self.node(id)?.children.last() {
            Some(&child) => Ok(Some(self.node(child)?.end_line)),
            None => Ok(None),
        }
    }

    /// `Some(tight)` for a list, `None` for anything else.
    ///
    /// Loose when consecutive items, or consecutive children of one item,
    /// are not on adjacent lines. Items and their children are already
    /// closed when the list closes, so their end lines are final.
    fn list_tightness(&self, id: NodeId) -> Result<Option<bool>, ParseError> {
        let node = self.node(id)?;
        if !matches!(node.kind, BlockKind::List { .. }) {
            return Ok(None);
        }
        for (i, &item) in node.children.iter().enumerate() {
            let item_node = self.node(item)?;
            if let Some(&next) = node.children.get(i + 1)
                && item_node.end_line + 1 != self.node(next)?.start_line
            {
                log::debug!("list at line {} is loose", node.start_line);
                return Ok(Some(false));
            }
            for pair in item_node.children.windows(2) {
                if self.node(pair[0])?.end_line + 1 != self.node(pair[1])?.start_line {
                    log::debug!("list at line {} is loose", node.start_line);
                    return Ok(Some(false));
                }
            }
        }
        Ok(Some(true))
    }

    fn push_content(&mut self, id: NodeId, text: String) -> Result<(), ParseError> {
        self.node_mut(id)?.pending.push(text);
        Ok(())
    }

    fn top(&self) -> Result<NodeId, ParseError> {
        self.stack
            .top()
            .ok_or_else(|| ParseError::invariant(self.line, "container stack is empty"))
    }

    fn node(&self, id: NodeId) -> Result<&ArenaNode, ParseError> {
        self.arena
            .get(id)
            .ok_or_else(|| ParseError::invariant(self.line, format!("{id:?} is not in the arena")))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut ArenaNode, ParseError> {
        let line = self.line;
        self.arena
            .get_mut(id)
            .ok_or_else(|| ParseError::invariant(line, format!("{id:?} is not in the arena")))
    }
}
