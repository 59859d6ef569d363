//! Segmented encoding forest
//!
//! One independent [`EncodingTree`] per block of `segment_size` modes.
//! Tree index == segment id; every tree spans modes [0, segment_size).
//! Qubits are addressed by (segment, node) or by a flat index
//! `segment * tree_size + node` that follows the concatenated arenas.

use std::fmt;

use tracing::debug;

use crate::tree::{EncodingTree, NodeIndex, QubitNode};
use crate::{EncodingConfig, EncodingError};

/// Address of one qubit in the forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct QubitId {
    /// Owning segment (tree)
    pub segment: usize,

    /// Arena index inside that tree
    pub node: NodeIndex,
}

impl QubitId {
    /// Create a qubit address
    pub fn new(segment: usize, node: NodeIndex) -> Self {
        Self { segment, node }
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.segment, self.node)
    }
}

/// Forest of equally sized encoding trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingForest {
    tree_size: usize,
    trees: Vec<EncodingTree>,
}

impl EncodingForest {
    /// Build the forest described by `config`
    pub fn build(config: &EncodingConfig) -> Result<Self, EncodingError> {
        config.validate()?;
        Ok(Self::with_segments(config.segment_size, config.num_segments()))
    }

    /// Build `num_segments` trees of `segment_size` modes each
    pub fn with_segments(segment_size: usize, num_segments: usize) -> Self {
        let trees: Vec<EncodingTree> = (0..num_segments)
            .map(|segment| EncodingTree::build(segment, 0, segment_size))
            .collect();
        let tree_size = trees.first().map_or(segment_size, EncodingTree::len);

        debug!(
            segments = num_segments,
            tree_size,
            qubits = tree_size * num_segments,
            "built encoding forest"
        );

        Self { tree_size, trees }
    }

    /// Qubits per tree
    pub fn tree_size(&self) -> usize {
        self.tree_size
    }

    /// Number of segments
    pub fn num_segments(&self) -> usize {
        self.trees.len()
    }

    /// Total qubits: segments × tree size
    pub fn qubit_count(&self) -> usize {
        self.tree_size * self.trees.len()
    }

    /// All trees, indexed by segment id
    pub fn trees(&self) -> &[EncodingTree] {
        &self.trees
    }

    /// Tree of one segment
    pub fn tree(&self, segment: usize) -> Option<&EncodingTree> {
        self.trees.get(segment)
    }

    /// Node behind a qubit address
    pub fn node(&self, qubit: QubitId) -> Option<&QubitNode> {
        self.trees.get(qubit.segment)?.get(qubit.node)
    }

    /// Root qubit of a segment
    pub fn root(&self, segment: usize) -> Option<QubitId> {
        let root = self.trees.get(segment)?.root_index()?;
        Some(QubitId::new(segment, root))
    }

    /// Flat index of a qubit in the concatenated arenas
    #[inline]
    pub fn flat_index(&self, qubit: QubitId) -> usize {
        qubit.segment * self.tree_size + qubit.node
    }

    /// Inverse of [`flat_index`](Self::flat_index)
    pub fn qubit_at(&self, flat: usize) -> Option<QubitId> {
        if self.tree_size == 0 || flat >= self.qubit_count() {
            return None;
        }
        Some(QubitId::new(flat / self.tree_size, flat % self.tree_size))
    }

    /// Every qubit in flattened order (tree by tree, construction order)
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.trees.iter().flat_map(|tree| {
            let segment = tree.segment_id();
            (0..tree.len()).map(move |node| QubitId::new(segment, node))
        })
    }
}
