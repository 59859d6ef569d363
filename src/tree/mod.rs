//! Binary-indexed (Fenwick) encoding tree
//!
//! Built by bisecting a half-open mode range [L, R):
//!   - L == R: exhausted range, no node
//!   - otherwise: one node for [L, R), then the upper half [m+1, R),
//!     then the lower half [L, m), with m = ⌊(L + R) / 2⌋
//!
//! The tree is stored as a flat arena in construction order (pre-order,
//! upper child first). Ranks run the other way: the first node built
//! (the root) gets rank `len - 1`, the last one gets rank 0. That is
//! the Fenwick addressing the update/parity recursions rely on.

mod node;
mod traversal;

pub use node::{NodeIndex, QubitNode};
pub use traversal::{ancestor_path, Ancestors};

/// One segment's encoding tree (arena of nodes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTree {
    segment_id: usize,
    nodes: Vec<QubitNode>,
}

impl EncodingTree {
    /// Build the tree for `segment_id` over modes `[lower, upper)`
    ///
    /// Callers pass `lower <= upper`; an empty range yields an empty tree.
    pub fn build(segment_id: usize, lower: usize, upper: usize) -> Self {
        debug_assert!(lower <= upper, "Range [{lower}, {upper}) is inverted");

        let mut nodes: Vec<QubitNode> = Vec::with_capacity(upper.saturating_sub(lower));

        // Explicit stack; the upper half is pushed last so it is expanded first
        let mut pending: Vec<(Option<NodeIndex>, usize, usize)> = vec![(None, lower, upper)];
        while let Some((parent, l, r)) = pending.pop() {
            if l >= r {
                continue;
            }

            let index = nodes.len();
            nodes.push(QubitNode::new(segment_id, l, r, parent));
            if let Some(parent) = parent {
                nodes[parent].push_child(index);
            }

            let mid = (l + r) / 2;
            pending.push((Some(index), l, mid));
            pending.push((Some(index), mid + 1, r));
        }

        let size = nodes.len();
        for (index, node) in nodes.iter_mut().enumerate() {
            node.set_tree_rank(size - index - 1);
        }

        Self { segment_id, nodes }
    }

    /// Segment this tree encodes
    pub fn segment_id(&self) -> usize {
        self.segment_id
    }

    /// Number of qubits in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for a tree built over an empty range
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root index (always the first node built)
    pub fn root_index(&self) -> Option<NodeIndex> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Root node
    pub fn root(&self) -> Option<&QubitNode> {
        self.nodes.first()
    }

    /// All nodes in construction order
    pub fn nodes(&self) -> &[QubitNode] {
        &self.nodes
    }

    /// Node lookup that tolerates stale indices
    pub fn get(&self, index: NodeIndex) -> Option<&QubitNode> {
        self.nodes.get(index)
    }

    /// Node lookup
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a node of this tree.
    pub fn node(&self, index: NodeIndex) -> &QubitNode {
        &self.nodes[index]
    }

    /// Arena index of the node holding `rank`
    pub fn index_of_rank(&self, rank: usize) -> Option<NodeIndex> {
        (rank < self.nodes.len()).then(|| self.nodes.len() - rank - 1)
    }

    /// Distance from the root
    pub fn depth(&self, index: NodeIndex) -> usize {
        Ancestors::new(self, index).count()
    }

    /// Proper ancestors of `index`, nearest first
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors::new(self, index)
    }

    /// Height bound: ⌈log2(len)⌉ + 1 levels
    pub fn height_bound(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        (self.nodes.len() as f64).log2().ceil() as usize + 1
    }
}
