//! Python bindings that expose the lattice survey via PyO3.

use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::aggregate;
use crate::{Coordinate, EncodingConfig, EncodingError, EncodingForest, Lattice};

fn to_py_err(err: EncodingError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python-facing encoded lattice.
#[pyclass]
#[derive(Debug)]
pub struct PyEncodedLattice {
    forest: EncodingForest,
    lattice: Lattice,
}

#[pymethods]
impl PyEncodedLattice {
    #[new]
    #[pyo3(signature = (total_modes, lattice_width, segment_size = 4))]
    /// Build the forest and embed it on a grid of the given width.
    pub fn new(total_modes: usize, lattice_width: usize, segment_size: usize) -> PyResult<Self> {
        let config = EncodingConfig {
            segment_size,
            total_modes,
            lattice_width,
        };
        let forest = EncodingForest::build(&config).map_err(to_py_err)?;
        let lattice = Lattice::embed(&forest, lattice_width).map_err(to_py_err)?;
        Ok(Self { forest, lattice })
    }

    /// Grid dimensions as `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.lattice.width(), self.lattice.height())
    }

    /// In-bounds neighbours of `(x, y)`.
    pub fn neighbours(&self, x: usize, y: usize) -> PyResult<Vec<(usize, usize)>> {
        let neighbours = self
            .lattice
            .neighbours(Coordinate::new(x, y))
            .map_err(to_py_err)?;
        Ok(neighbours.into_iter().map(|c| (c.x, c.y)).collect())
    }

    /// Pauli weight of the hopping term between two sites.
    pub fn pauli_weight(&self, creation: (usize, usize), annihilation: (usize, usize)) -> PyResult<usize> {
        crate::pauli_weight(
            Coordinate::new(creation.0, creation.1),
            Coordinate::new(annihilation.0, annihilation.1),
            &self.lattice,
            &self.forest,
        )
        .map_err(to_py_err)
    }

    /// Survey every lattice edge.
    ///
    /// Returns:
    ///     `(interactions, total_weight, average_weight)`.
    pub fn survey(&self) -> PyResult<(usize, usize, f64)> {
        let summary = aggregate::survey_parallel(&self.lattice, &self.forest).map_err(to_py_err)?;
        Ok((
            summary.interactions,
            summary.total_weight,
            summary.average_weight().unwrap_or(0.0),
        ))
    }
}

/// Create Python module.
#[pymodule]
pub fn segmented_fenwick_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEncodedLattice>()?;
    Ok(())
}
