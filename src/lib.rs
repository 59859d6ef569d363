//! # Segmented Fenwick-tree encodings on a 2D lattice
//!
//! Estimates the Pauli weight of nearest-neighbour hopping terms when
//! fermionic modes are encoded block by block with independent
//! binary-indexed (Fenwick) trees and the qubits are laid out on a grid.
//!
//! ## Pipeline
//!
//! 1. **Forest**: one [`EncodingTree`] per segment of `segment_size` modes
//! 2. **Embedding**: every segment's qubits occupy a 2×2 tile of the [`Lattice`]
//! 3. **Derivation**: per qubit, the update set (ancestors) and parity set
//!    (lower-ranked children along the ancestor chain plus earlier segment roots)
//! 4. **Weight**: symmetric differences of both modes' sets give the support
//!    of the hopping operator; its size is the Pauli weight
//!
//! ## Usage Example
//!
//! ```
//! use segmented_fenwick::{aggregate, EncodingConfig, EncodingForest, Lattice};
//!
//! let config = EncodingConfig::square_lattice(4);
//! let forest = EncodingForest::build(&config)?;
//! let lattice = Lattice::embed(&forest, config.lattice_width)?;
//! let summary = aggregate::survey(&lattice, &forest)?;
//! assert_eq!(summary.interactions, 24);
//! assert_eq!(summary.total_weight, 192);
//! # Ok::<(), segmented_fenwick::EncodingError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod aggregate; // Lattice-wide surveys and statistics
pub mod derivation; // Update/parity sets per qubit
pub mod forest; // One encoding tree per segment
pub mod lattice; // 2D placement and adjacency
pub mod tree; // Binary-indexed encoding tree
pub mod weight; // Pauli weight of a hopping term

/// Python bindings for exposing the lattice survey to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use aggregate::{EdgeWeight, WeightSummary};
pub use derivation::{gates_for_mode, parity_set, update_set, ModeGates, QubitSet};
pub use forest::{EncodingForest, QubitId};
pub use lattice::{Coordinate, Lattice};
pub use tree::{EncodingTree, NodeIndex, QubitNode};
pub use weight::{pauli_weight, HoppingSupport};

use thiserror::Error;

/// Encoding parameters consumed by the forest and lattice builders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct EncodingConfig {
    /// Modes per encoding tree
    pub segment_size: usize,

    /// Total fermionic modes to encode
    pub total_modes: usize,

    /// Grid width (must be divisible by 4 for the tile embedding)
    pub lattice_width: usize,
}

impl EncodingConfig {
    /// The only segment size the 2×2 tile embedding supports
    pub const TILE_SEGMENT_SIZE: usize = 4;

    /// Square `side × side` lattice of modes, one mode per site
    pub fn square_lattice(side: usize) -> Self {
        Self {
            segment_size: Self::TILE_SEGMENT_SIZE,
            total_modes: side * side,
            lattice_width: side,
        }
    }

    /// Number of segments: ⌈total_modes / segment_size⌉
    pub fn num_segments(&self) -> usize {
        if self.segment_size == 0 {
            return 0;
        }
        self.total_modes.div_ceil(self.segment_size)
    }

    /// Qubits across the whole forest
    pub fn qubit_count(&self) -> usize {
        self.num_segments() * self.segment_size
    }

    /// Grid height derived from the qubit count and width
    pub fn lattice_height(&self) -> usize {
        if self.lattice_width == 0 {
            return 0;
        }
        self.qubit_count() / self.lattice_width
    }

    /// Reject degenerate parameters before anything is built
    pub fn validate(&self) -> Result<(), EncodingError> {
        if self.segment_size == 0 {
            return Err(EncodingError::UnsupportedConfiguration(
                "segment size must be positive".to_string(),
            ));
        }
        if self.total_modes == 0 {
            return Err(EncodingError::UnsupportedConfiguration(
                "at least one mode is required".to_string(),
            ));
        }
        if self.lattice_width == 0 {
            return Err(EncodingError::UnsupportedConfiguration(
                "lattice width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors raised while building or querying an encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Qubit and coordinate counts disagree with each other or with the grid size
    #[error(
        "Lattice dimension mismatch: {qubits} qubits, {x_coordinates} x-coordinates, \
         {y_coordinates} y-coordinates for a {width}x{height} grid"
    )]
    DimensionMismatch {
        /// Qubits supplied
        qubits: usize,
        /// x-coordinates supplied
        x_coordinates: usize,
        /// y-coordinates supplied
        y_coordinates: usize,
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
    },

    /// Segment size or width the embedding cannot handle
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// Coordinate outside `[0, width) × [0, height)`
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} lattice")]
    CoordinateOutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Lattice width
        width: usize,
        /// Lattice height
        height: usize,
    },

    /// Two qubits were placed on the same cell
    #[error("Coordinate ({x}, {y}) is assigned to more than one qubit")]
    DuplicateCoordinate {
        /// Column
        x: usize,
        /// Row
        y: usize,
    },
}
