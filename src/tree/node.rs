//! Arena node of an encoding tree
//!
//! Node = one qubit owning the mode range [lower, upper)
//! Children computed via midpoint: m = ⌊(lower + upper) / 2⌋
//!   Upper child: [m+1, upper)
//!   Lower child: [lower, m)

use std::fmt;

/// Position of a node inside its tree's arena (construction order)
pub type NodeIndex = usize;

/// One encoded qubit
///
/// Parent and children are indices into the owning tree's arena,
/// so the back-reference to the parent never owns anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QubitNode {
    segment_id: usize,
    tree_rank: usize,
    lower: usize,
    upper: usize,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl QubitNode {
    pub(crate) fn new(segment_id: usize, lower: usize, upper: usize, parent: Option<NodeIndex>) -> Self {
        Self {
            segment_id,
            tree_rank: 0,
            lower,
            upper,
            parent,
            children: Vec::with_capacity(2),
        }
    }

    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }

    pub(crate) fn set_tree_rank(&mut self, rank: usize) {
        self.tree_rank = rank;
    }

    /// Segment (tree) this qubit belongs to
    #[inline]
    pub fn segment_id(&self) -> usize {
        self.segment_id
    }

    /// Fenwick rank within the tree, in `[0, tree_size)`
    #[inline]
    pub fn tree_rank(&self) -> usize {
        self.tree_rank
    }

    /// Mode range owned by this node (half-open)
    #[inline]
    pub fn range(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    /// Split point of the owned range
    #[inline]
    pub fn midpoint(&self) -> usize {
        (self.lower + self.upper) / 2
    }

    /// Parent index, `None` for the root
    #[inline]
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Children in construction order (upper-half child first)
    #[inline]
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Check if root
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if leaf
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for QubitNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "q[{}:{}] [{}, {})",
            self.segment_id, self.tree_rank, self.lower, self.upper
        )
    }
}
