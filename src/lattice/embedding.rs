//! Tile embedding of a four-qubit-per-segment forest
//!
//! Segment s occupies the 2×2 tile with origin
//!   x0 = 2s mod width,  y0 = 2·⌊2s / width⌋
//! and its qubits, in arena order, take the offsets (0,0), (0,1), (1,0), (1,1).
//! Tiles are packed row-major over the grid.

use tracing::debug;

use super::{Coordinate, Lattice};
use crate::forest::{EncodingForest, QubitId};
use crate::{EncodingConfig, EncodingError};

/// (dx, dy) of each arena position inside a tile
pub const TILE_OFFSETS: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Top-left site of a segment's tile
pub fn tile_origin(segment: usize, width: usize) -> Coordinate {
    Coordinate::new((2 * segment) % width, 2 * ((2 * segment) / width))
}

/// Place every qubit of `forest` on a grid of the given width
///
/// Only four-qubit trees and widths divisible by 4 have a defined layout.
pub fn embed(forest: &EncodingForest, width: usize) -> Result<Lattice, EncodingError> {
    if forest.tree_size() != EncodingConfig::TILE_SEGMENT_SIZE {
        return Err(EncodingError::UnsupportedConfiguration(format!(
            "tile embedding needs segments of {} modes, got {}",
            EncodingConfig::TILE_SEGMENT_SIZE,
            forest.tree_size()
        )));
    }
    if width == 0 || width % 4 != 0 {
        return Err(EncodingError::UnsupportedConfiguration(format!(
            "lattice width must be a positive multiple of 4, got {width}"
        )));
    }

    let qubit_count = forest.qubit_count();
    let height = qubit_count / width;

    let mut qubits: Vec<QubitId> = Vec::with_capacity(qubit_count);
    let mut xs = Vec::with_capacity(qubit_count);
    let mut ys = Vec::with_capacity(qubit_count);

    for tree in forest.trees() {
        let origin = tile_origin(tree.segment_id(), width);
        for (node, (dx, dy)) in (0..tree.len()).zip(TILE_OFFSETS) {
            qubits.push(QubitId::new(tree.segment_id(), node));
            xs.push(origin.x + dx);
            ys.push(origin.y + dy);
        }
    }

    let lattice = Lattice::new(width, height, &qubits, &xs, &ys)?;
    debug!(width, height, qubits = qubit_count, "embedded forest on lattice");
    Ok(lattice)
}
