//! Dense qubit sets over flat forest indices
//!
//! One bit per qubit of the forest. Symmetric difference is XOR, which is
//! exactly how two Pauli actions on the same qubit cancel.

use std::fmt;

use bitvec::prelude::*;

/// Set of qubits keyed by flat index
#[derive(Clone, Default)]
pub struct QubitSet {
    bits: BitVec,
}

impl QubitSet {
    /// Empty set able to hold flat indices below `universe` without growing
    pub fn with_universe(universe: usize) -> Self {
        Self {
            bits: bitvec![0; universe],
        }
    }

    /// Number of indices the backing storage currently covers
    pub fn universe(&self) -> usize {
        self.bits.len()
    }

    fn grow_to(&mut self, len: usize) {
        if self.bits.len() < len {
            self.bits.resize(len, false);
        }
    }

    /// Insert; returns true if the qubit was not present
    pub fn insert(&mut self, flat: usize) -> bool {
        self.grow_to(flat + 1);
        let present = self.bits[flat];
        self.bits.set(flat, true);
        !present
    }

    /// Membership
    pub fn contains(&self, flat: usize) -> bool {
        self.bits.get(flat).map_or(false, |bit| *bit)
    }

    /// Number of distinct qubits
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// True if no qubit is present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Qubits in exactly one of the two sets
    pub fn symmetric_difference(&self, other: &QubitSet) -> QubitSet {
        let mut result = self.clone();
        result.grow_to(other.bits.len());
        for flat in other.bits.iter_ones() {
            let present = result.bits[flat];
            result.bits.set(flat, !present);
        }
        result
    }

    /// Qubits in either set
    pub fn union(&self, other: &QubitSet) -> QubitSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// In-place union
    pub fn union_with(&mut self, other: &QubitSet) {
        self.grow_to(other.bits.len());
        for flat in other.bits.iter_ones() {
            self.bits.set(flat, true);
        }
    }

    /// Flat indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl FromIterator<usize> for QubitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = QubitSet::default();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for QubitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for flat in iter {
            self.insert(flat);
        }
    }
}

// Equal by contents; the backing length is an allocation detail
impl PartialEq for QubitSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for QubitSet {}

impl fmt::Debug for QubitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_difference() {
        let a: QubitSet = [1, 2, 3, 6].into_iter().collect();
        let b: QubitSet = [3, 4, 5, 10].into_iter().collect();
        let diff = a.symmetric_difference(&b);
        assert_eq!(diff.iter().collect::<Vec<_>>(), vec![1, 2, 4, 5, 6, 10]);
    }

    #[test]
    fn test_union_dedups() {
        let a: QubitSet = [1, 2, 3].into_iter().collect();
        let b: QubitSet = [2, 3, 9].into_iter().collect();
        assert_eq!(a.union(&b).len(), 4);
    }

    #[test]
    fn test_equality_ignores_universe() {
        let mut a = QubitSet::with_universe(16);
        a.insert(2);
        let b: QubitSet = [2].into_iter().collect();
        assert_eq!(a, b);
        assert!(a.contains(2) && !a.contains(15) && !a.contains(99));
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = QubitSet::with_universe(4);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
