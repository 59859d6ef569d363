//! Survey totals and derived statistics

use std::collections::BTreeMap;

use super::EdgeWeight;
use crate::lattice::Lattice;

/// Aggregated result of a lattice survey
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct WeightSummary {
    /// Lattice width, the N of the analytic reference
    pub side: usize,

    /// Undirected nearest-neighbour edges: (w-1)·h + (h-1)·w
    pub interactions: usize,

    /// Directed terms costed (each edge from both ends)
    pub directed_terms: usize,

    /// Sum of all directed term weights
    pub total_weight: usize,

    /// Smallest term weight (0 if nothing was costed)
    pub min_weight: usize,

    /// Largest term weight
    pub max_weight: usize,

    /// weight -> number of directed terms
    pub histogram: BTreeMap<usize, usize>,

    /// blake3 digest of the ordered (creation, annihilation, weight) stream
    pub fingerprint: [u8; 32],
}

impl WeightSummary {
    /// Fold per-edge weights into totals
    pub fn from_edges(lattice: &Lattice, edges: &[EdgeWeight]) -> Self {
        let mut histogram = BTreeMap::new();
        let mut hasher = blake3::Hasher::new();
        let mut total_weight = 0;

        for edge in edges {
            total_weight += edge.weight;
            *histogram.entry(edge.weight).or_insert(0) += 1;
            for value in [
                edge.creation.x,
                edge.creation.y,
                edge.annihilation.x,
                edge.annihilation.y,
                edge.weight,
            ] {
                hasher.update(&(value as u64).to_le_bytes());
            }
        }

        Self {
            side: lattice.width(),
            interactions: lattice.undirected_edge_count(),
            directed_terms: edges.len(),
            total_weight,
            min_weight: histogram.keys().next().copied().unwrap_or(0),
            max_weight: histogram.keys().next_back().copied().unwrap_or(0),
            histogram,
            fingerprint: *hasher.finalize().as_bytes(),
        }
    }

    /// Mean weight per directed term: total / (2 · interactions)
    pub fn average_weight(&self) -> Option<f64> {
        (self.interactions > 0).then(|| self.total_weight as f64 / (2 * self.interactions) as f64)
    }

    /// Analytic reference (N³ − N) / interactions + 1
    pub fn analytic_reference(&self) -> Option<f64> {
        let n = self.side as f64;
        (self.interactions > 0).then(|| (n.powi(3) - n) / self.interactions as f64 + 1.0)
    }

    /// Hex form of the fingerprint
    pub fn fingerprint_hex(&self) -> String {
        blake3::Hash::from(self.fingerprint).to_hex().to_string()
    }

    /// Generate report
    pub fn report(&self) -> String {
        let average = self.average_weight().unwrap_or(0.0);
        let reference = self.analytic_reference().unwrap_or(0.0);
        format!(
            "Interactions: {}\nTotal Pauli weight: {}\nAverage weight: {:.4}\nAnalytic reference: {:.4}\nWeight range: {}..={}\nFingerprint: {}",
            self.interactions,
            self.total_weight,
            average,
            reference,
            self.min_weight,
            self.max_weight,
            self.fingerprint_hex()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::{EncodingForest, QubitId};
    use crate::lattice::Coordinate;

    fn tile() -> Lattice {
        let qubits: Vec<QubitId> = (0..4).map(|n| QubitId::new(0, n)).collect();
        Lattice::new(2, 2, &qubits, &[0, 0, 1, 1], &[0, 1, 0, 1]).expect("valid placement")
    }

    #[test]
    fn test_statistics() {
        let lattice = tile();
        let edge = |weight| EdgeWeight {
            creation: Coordinate::new(0, 0),
            annihilation: Coordinate::new(1, 0),
            weight,
        };
        let summary = WeightSummary::from_edges(&lattice, &[edge(2), edge(4), edge(4), edge(6)]);

        assert_eq!(summary.interactions, 4);
        assert_eq!(summary.total_weight, 16);
        assert_eq!((summary.min_weight, summary.max_weight), (2, 6));
        assert_eq!(summary.histogram.get(&4), Some(&2));
        assert_eq!(summary.average_weight(), Some(2.0));
        // (8 - 2) / 4 + 1
        assert_eq!(summary.analytic_reference(), Some(2.5));
    }

    #[test]
    fn test_fingerprint_tracks_order() {
        let lattice = tile();
        let a = EdgeWeight {
            creation: Coordinate::new(0, 0),
            annihilation: Coordinate::new(1, 0),
            weight: 3,
        };
        let b = EdgeWeight {
            creation: Coordinate::new(1, 0),
            annihilation: Coordinate::new(0, 0),
            weight: 3,
        };
        let forward = WeightSummary::from_edges(&lattice, &[a, b]);
        let backward = WeightSummary::from_edges(&lattice, &[b, a]);
        assert_eq!(forward.total_weight, backward.total_weight);
        assert_ne!(forward.fingerprint, backward.fingerprint);
        assert_eq!(forward.fingerprint_hex().len(), 64);
    }

    #[test]
    fn test_empty_survey() {
        let forest = EncodingForest::with_segments(4, 0);
        let lattice = Lattice::embed(&forest, 4).expect("empty embedding");
        let summary = WeightSummary::from_edges(&lattice, &[]);
        assert_eq!(summary.interactions, 0);
        assert_eq!(summary.average_weight(), None);
        assert!(summary.report().contains("Interactions: 0"));
    }
}
