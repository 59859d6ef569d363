//! Update and parity sets of an encoded mode
//!
//! For a qubit q of rank r in segment s:
//!   - update(q): proper ancestors of q, root first
//!   - parity(q, r): children with rank < r of q and of every ancestor,
//!     plus the root of every segment s' < s
//!
//! Both are pure functions of the immutable forest and are recomputed per
//! query. The ancestor walks follow parent indices iteratively.

mod qubit_set;

pub use qubit_set::QubitSet;

use tracing::trace;

use crate::forest::{EncodingForest, QubitId};
use crate::lattice::{Coordinate, Lattice};
use crate::tree::ancestor_path;
use crate::EncodingError;

/// Qubits touched when creating or annihilating one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeGates {
    /// Update (X-type) qubits
    pub update: QubitSet,

    /// Qubit encoding the mode itself
    pub target: QubitId,

    /// Parity (Z-type) qubits
    pub parity: QubitSet,
}

/// Proper ancestors of `qubit`, ordered root-first
///
/// Qubits outside the forest have no ancestors.
pub fn update_set(forest: &EncodingForest, qubit: QubitId) -> Vec<QubitId> {
    let Some(tree) = forest.tree(qubit.segment) else {
        return Vec::new();
    };
    ancestor_path(tree, qubit.node)
        .into_iter()
        .map(|node| QubitId::new(qubit.segment, node))
        .collect()
}

/// In-tree part of the parity set
///
/// Children of `qubit` with rank below `rank_bound`, then the same for its
/// parent with the same bound, and so on up to the root.
pub fn tree_parity_set(forest: &EncodingForest, qubit: QubitId, rank_bound: usize) -> Vec<QubitId> {
    let mut parity = Vec::new();
    let Some(tree) = forest.tree(qubit.segment) else {
        return parity;
    };

    let mut current = Some(qubit.node);
    while let Some(index) = current {
        let Some(node) = tree.get(index) else {
            break;
        };
        parity.extend(
            node.children()
                .iter()
                .copied()
                .filter(|&child| tree.node(child).tree_rank() < rank_bound)
                .map(|child| QubitId::new(qubit.segment, child)),
        );
        current = node.parent();
    }
    parity
}

/// Full parity set: in-tree part plus the roots of all earlier segments
pub fn parity_set(forest: &EncodingForest, qubit: QubitId, rank_bound: usize) -> Vec<QubitId> {
    let mut parity = tree_parity_set(forest, qubit, rank_bound);
    parity.extend((0..qubit.segment).filter_map(|segment| forest.root(segment)));
    parity
}

/// Update set, target, and parity set for the mode at `at`
pub fn gates_for_mode(
    lattice: &Lattice,
    at: Coordinate,
    forest: &EncodingForest,
) -> Result<ModeGates, EncodingError> {
    let target = lattice.qubit_at(at)?;
    let node = forest.node(target).ok_or_else(|| {
        EncodingError::UnsupportedConfiguration(format!(
            "qubit {target} at {at} is not part of the forest"
        ))
    })?;

    let universe = forest.qubit_count();
    let mut update = QubitSet::with_universe(universe);
    update.extend(update_set(forest, target).into_iter().map(|q| forest.flat_index(q)));
    let mut parity = QubitSet::with_universe(universe);
    parity.extend(
        parity_set(forest, target, node.tree_rank())
            .into_iter()
            .map(|q| forest.flat_index(q)),
    );

    trace!(%at, %target, rank = node.tree_rank(), ?update, ?parity, "mode gates");

    Ok(ModeGates {
        update,
        target,
        parity,
    })
}
