//! Pauli weight of a two-mode hopping term
//!
//! With (U_c, T_c, P_c) and (U_a, T_a, P_a) the gates of the creation and
//! annihilation modes:
//!   ΔU = U_c △ U_a,  ΔP = P_c △ P_a,  ΔT = {T_c, T_a} unless T_c == T_a
//! The weight is |ΔU ∪ ΔP ∪ ΔT|; a qubit in several parts counts once.

use tracing::trace;

use crate::derivation::{gates_for_mode, QubitSet};
use crate::forest::EncodingForest;
use crate::lattice::{Coordinate, Lattice};
use crate::EncodingError;

/// Qubits a hopping term acts on, split by origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoppingSupport {
    /// Update qubits that do not cancel
    pub update: QubitSet,

    /// Parity qubits that do not cancel
    pub parity: QubitSet,

    /// The two target qubits (empty if both modes share one)
    pub target: QubitSet,
}

impl HoppingSupport {
    /// Compute the support of the term coupling `creation` and `annihilation`
    pub fn between(
        creation: Coordinate,
        annihilation: Coordinate,
        lattice: &Lattice,
        forest: &EncodingForest,
    ) -> Result<Self, EncodingError> {
        let created = gates_for_mode(lattice, creation, forest)?;
        let annihilated = gates_for_mode(lattice, annihilation, forest)?;

        let update = created.update.symmetric_difference(&annihilated.update);
        let parity = created.parity.symmetric_difference(&annihilated.parity);

        let mut target = QubitSet::with_universe(forest.qubit_count());
        if created.target != annihilated.target {
            target.insert(forest.flat_index(created.target));
            target.insert(forest.flat_index(annihilated.target));
        }

        Ok(Self {
            update,
            parity,
            target,
        })
    }

    /// All distinct qubits acted on
    pub fn qubits(&self) -> QubitSet {
        let mut support = self.update.union(&self.parity);
        support.union_with(&self.target);
        support
    }

    /// Pauli weight: number of distinct qubits acted on
    pub fn weight(&self) -> usize {
        self.qubits().len()
    }
}

/// Pauli weight of the hopping term between two lattice sites
pub fn pauli_weight(
    creation: Coordinate,
    annihilation: Coordinate,
    lattice: &Lattice,
    forest: &EncodingForest,
) -> Result<usize, EncodingError> {
    let support = HoppingSupport::between(creation, annihilation, lattice, forest)?;
    let weight = support.weight();
    trace!(
        %creation,
        %annihilation,
        update = ?support.update,
        parity = ?support.parity,
        weight,
        "hopping term"
    );
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_by_four() -> (EncodingForest, Lattice) {
        let forest = EncodingForest::with_segments(4, 4);
        let lattice = Lattice::embed(&forest, 4).expect("4x4 embedding");
        (forest, lattice)
    }

    #[test]
    fn test_root_to_leaf_within_tile() {
        let (forest, lattice) = four_by_four();
        // Root (rank 3) and its rank-2 child: ΔU = {root}, ΔP = {rank 2}
        let support =
            HoppingSupport::between(Coordinate::new(0, 0), Coordinate::new(0, 1), &lattice, &forest)
                .expect("in bounds");
        assert_eq!(support.update.iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(support.parity.iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(support.weight(), 2);
    }

    #[test]
    fn test_known_weights_around_origin() {
        let (forest, lattice) = four_by_four();
        let c = Coordinate::new;
        let cases = [
            (c(0, 0), c(1, 0), 4),
            (c(0, 0), c(0, 1), 2),
            (c(1, 0), c(2, 0), 6),
            (c(0, 1), c(0, 2), 7),
            (c(1, 1), c(1, 2), 7),
            (c(3, 3), c(2, 3), 3),
        ];
        for (from, to, expected) in cases {
            let weight = pauli_weight(from, to, &lattice, &forest).expect("in bounds");
            assert_eq!(weight, expected, "{from} -> {to}");
        }
    }

    #[test]
    fn test_same_site_has_no_target_part() {
        let (forest, lattice) = four_by_four();
        let here = Coordinate::new(2, 2);
        let support = HoppingSupport::between(here, here, &lattice, &forest).expect("in bounds");
        assert!(support.target.is_empty());
        assert_eq!(support.weight(), 0);
    }

    #[test]
    fn test_out_of_bounds_propagates() {
        let (forest, lattice) = four_by_four();
        let result = pauli_weight(Coordinate::new(0, 0), Coordinate::new(0, 9), &lattice, &forest);
        assert!(matches!(result, Err(EncodingError::CoordinateOutOfBounds { y: 9, .. })));
    }
}
