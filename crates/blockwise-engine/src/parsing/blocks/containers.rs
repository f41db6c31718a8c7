use super::arena::NodeId;

/// Open containers from the document root (bottom) to the innermost open
/// container (top). Entries are arena indices; the stack never owns nodes.
#[derive(Debug, Clone)]
pub struct ContainerStack(Vec<NodeId>);

impl ContainerStack {
    pub fn new(root: NodeId) -> Self {
        Self(vec![root])
    }

    pub fn push(&mut self, id: NodeId) {
        self.0.push(id);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    /// The innermost open container.
    pub fn top(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// Entry at `depth`, 0 being the root.
    pub fn get(&self, depth: usize) -> Option<NodeId> {
        self.0.get(depth).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
