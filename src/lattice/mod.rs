//! 2D lattice of qubits
//!
//! Every qubit of the forest sits on exactly one integer site (x, y) with
//! 0 <= x < width and 0 <= y < height. Adjacency is the 4-neighbourhood
//! without wraparound; lattice edges are the hopping terms to cost.

mod embedding;

pub use embedding::{embed, tile_origin, TILE_OFFSETS};

use std::fmt;

use crate::forest::{EncodingForest, QubitId};
use crate::EncodingError;

/// Lattice site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Coordinate {
    /// Column
    pub x: usize,

    /// Row
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Grid holding one qubit per site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    width: usize,
    height: usize,

    /// Row-major cells: index y * width + x
    cells: Vec<QubitId>,

    /// Site of each qubit, in the order the qubits were supplied
    coordinates: Vec<Coordinate>,
}

impl Lattice {
    /// Place `qubits[i]` at `(x_coordinates[i], y_coordinates[i])`
    ///
    /// Fails unless the counts agree, `width * height` equals the qubit
    /// count, and the placement is a bijection onto the grid.
    pub fn new(
        width: usize,
        height: usize,
        qubits: &[QubitId],
        x_coordinates: &[usize],
        y_coordinates: &[usize],
    ) -> Result<Self, EncodingError> {
        let counts_agree =
            qubits.len() == x_coordinates.len() && x_coordinates.len() == y_coordinates.len();
        if !counts_agree || width * height != qubits.len() {
            return Err(EncodingError::DimensionMismatch {
                qubits: qubits.len(),
                x_coordinates: x_coordinates.len(),
                y_coordinates: y_coordinates.len(),
                width,
                height,
            });
        }

        let mut slots: Vec<Option<QubitId>> = vec![None; qubits.len()];
        let mut coordinates = Vec::with_capacity(qubits.len());
        for ((&qubit, &x), &y) in qubits.iter().zip(x_coordinates).zip(y_coordinates) {
            if x >= width || y >= height {
                return Err(EncodingError::CoordinateOutOfBounds { x, y, width, height });
            }
            let slot = &mut slots[y * width + x];
            if slot.is_some() {
                return Err(EncodingError::DuplicateCoordinate { x, y });
            }
            *slot = Some(qubit);
            coordinates.push(Coordinate::new(x, y));
        }

        // n placements into n distinct cells fill every cell
        let cells = slots.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells,
            coordinates,
        })
    }

    /// Embed `forest` with the 2×2 tile layout (see [`embed`])
    pub fn embed(forest: &EncodingForest, width: usize) -> Result<Self, EncodingError> {
        embedding::embed(forest, width)
    }

    /// Grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of sites
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a 0-site lattice
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sites in qubit order
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Check bounds
    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        at.x < self.width && at.y < self.height
    }

    fn check(&self, at: Coordinate) -> Result<(), EncodingError> {
        if self.contains(at) {
            Ok(())
        } else {
            Err(EncodingError::CoordinateOutOfBounds {
                x: at.x,
                y: at.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Qubit placed at `at`
    pub fn qubit_at(&self, at: Coordinate) -> Result<QubitId, EncodingError> {
        self.check(at)?;
        Ok(self.cells[at.y * self.width + at.x])
    }

    /// In-bounds sites among (x-1, y), (x+1, y), (x, y-1), (x, y+1), in that order
    pub fn neighbours(&self, at: Coordinate) -> Result<Vec<Coordinate>, EncodingError> {
        self.check(at)?;

        let mut neighbours = Vec::with_capacity(4);
        if at.x > 0 {
            neighbours.push(Coordinate::new(at.x - 1, at.y));
        }
        if at.x + 1 < self.width {
            neighbours.push(Coordinate::new(at.x + 1, at.y));
        }
        if at.y > 0 {
            neighbours.push(Coordinate::new(at.x, at.y - 1));
        }
        if at.y + 1 < self.height {
            neighbours.push(Coordinate::new(at.x, at.y + 1));
        }
        Ok(neighbours)
    }

    /// Undirected nearest-neighbour edges: (w-1)·h + (h-1)·w
    pub fn undirected_edge_count(&self) -> usize {
        self.width.saturating_sub(1) * self.height + self.height.saturating_sub(1) * self.width
    }
}

/// Grid of segment ids, one row per line
impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: Vec<String> = row.iter().map(|q| q.segment.to_string()).collect();
            writeln!(f, "[{}]", line.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_lattice() -> Lattice {
        let qubits: Vec<QubitId> = (0..4).map(|n| QubitId::new(0, n)).collect();
        Lattice::new(2, 2, &qubits, &[0, 0, 1, 1], &[0, 1, 0, 1]).expect("valid placement")
    }

    #[test]
    fn test_lookup_by_coordinate() {
        let lattice = row_lattice();
        assert_eq!(lattice.qubit_at(Coordinate::new(0, 1)), Ok(QubitId::new(0, 1)));
        assert_eq!(lattice.qubit_at(Coordinate::new(1, 0)), Ok(QubitId::new(0, 2)));
        assert_eq!(
            lattice.qubit_at(Coordinate::new(2, 0)),
            Err(EncodingError::CoordinateOutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn test_count_mismatch() {
        let qubits: Vec<QubitId> = (0..4).map(|n| QubitId::new(0, n)).collect();
        let err = Lattice::new(2, 2, &qubits, &[0, 0, 1], &[0, 1, 0, 1]).unwrap_err();
        assert!(matches!(err, EncodingError::DimensionMismatch { x_coordinates: 3, .. }));

        let err = Lattice::new(3, 2, &qubits, &[0, 0, 1, 1], &[0, 1, 0, 1]).unwrap_err();
        assert!(matches!(err, EncodingError::DimensionMismatch { width: 3, .. }));
    }

    #[test]
    fn test_duplicate_site_rejected() {
        let qubits: Vec<QubitId> = (0..4).map(|n| QubitId::new(0, n)).collect();
        let err = Lattice::new(2, 2, &qubits, &[0, 0, 1, 0], &[0, 1, 0, 0]).unwrap_err();
        assert_eq!(err, EncodingError::DuplicateCoordinate { x: 0, y: 0 });
    }

    #[test]
    fn test_neighbours_no_wraparound() {
        let lattice = row_lattice();
        assert_eq!(
            lattice.neighbours(Coordinate::new(0, 0)),
            Ok(vec![Coordinate::new(1, 0), Coordinate::new(0, 1)])
        );
        assert_eq!(
            lattice.neighbours(Coordinate::new(1, 1)),
            Ok(vec![Coordinate::new(0, 1), Coordinate::new(1, 0)])
        );
        assert!(lattice.neighbours(Coordinate::new(5, 5)).is_err());
    }

    #[test]
    fn test_edge_count_and_display() {
        let lattice = row_lattice();
        assert_eq!(lattice.undirected_edge_count(), 4);
        assert_eq!(lattice.to_string(), "[0, 0]\n[0, 0]\n");
    }
}
