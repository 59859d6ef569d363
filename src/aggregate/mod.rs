//! Lattice-wide Pauli weight survey
//!
//! Visits every site and every in-bounds neighbour, so each undirected
//! edge is costed once from each endpoint. Queries never mutate the forest
//! or lattice, so sites can be costed independently; the parallel survey
//! splits work per site with rayon and keeps the sequential edge order.

mod summary;

pub use summary::WeightSummary;

use rayon::prelude::*;
use tracing::{info, info_span};

use crate::forest::EncodingForest;
use crate::lattice::{Coordinate, Lattice};
use crate::weight::pauli_weight;
use crate::EncodingError;

/// One directed hopping term and its weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct EdgeWeight {
    /// Site of the creation operator
    pub creation: Coordinate,

    /// Site of the annihilation operator
    pub annihilation: Coordinate,

    /// Pauli weight of the term
    pub weight: usize,
}

/// Directed neighbour pairs in survey order
pub fn directed_edges(lattice: &Lattice) -> Result<Vec<(Coordinate, Coordinate)>, EncodingError> {
    let mut edges = Vec::with_capacity(2 * lattice.undirected_edge_count());
    for &site in lattice.coordinates() {
        for neighbour in lattice.neighbours(site)? {
            edges.push((site, neighbour));
        }
    }
    Ok(edges)
}

fn site_weights(
    site: Coordinate,
    lattice: &Lattice,
    forest: &EncodingForest,
) -> Result<Vec<EdgeWeight>, EncodingError> {
    lattice
        .neighbours(site)?
        .into_iter()
        .map(|neighbour| -> Result<EdgeWeight, EncodingError> {
            Ok(EdgeWeight {
                creation: site,
                annihilation: neighbour,
                weight: pauli_weight(site, neighbour, lattice, forest)?,
            })
        })
        .collect()
}

/// Weight of every directed neighbour pair, site by site
pub fn edge_weights(lattice: &Lattice, forest: &EncodingForest) -> Result<Vec<EdgeWeight>, EncodingError> {
    let mut edges = Vec::with_capacity(2 * lattice.undirected_edge_count());
    for &site in lattice.coordinates() {
        edges.extend(site_weights(site, lattice, forest)?);
    }
    Ok(edges)
}

/// Same as [`edge_weights`], with sites costed on the rayon pool
pub fn edge_weights_parallel(
    lattice: &Lattice,
    forest: &EncodingForest,
) -> Result<Vec<EdgeWeight>, EncodingError> {
    let per_site: Vec<Vec<EdgeWeight>> = lattice
        .coordinates()
        .par_iter()
        .map(|&site| site_weights(site, lattice, forest))
        .collect::<Result<_, EncodingError>>()?;
    Ok(per_site.into_iter().flatten().collect())
}

/// Sequential survey of the whole lattice
pub fn survey(lattice: &Lattice, forest: &EncodingForest) -> Result<WeightSummary, EncodingError> {
    let _span = info_span!("survey", width = lattice.width(), height = lattice.height()).entered();
    let summary = WeightSummary::from_edges(lattice, &edge_weights(lattice, forest)?);
    info!(
        interactions = summary.interactions,
        total_weight = summary.total_weight,
        "survey complete"
    );
    Ok(summary)
}

/// Parallel survey; yields the same summary as [`survey`]
pub fn survey_parallel(lattice: &Lattice, forest: &EncodingForest) -> Result<WeightSummary, EncodingError> {
    let _span = info_span!("survey_parallel", width = lattice.width(), height = lattice.height()).entered();
    let summary = WeightSummary::from_edges(lattice, &edge_weights_parallel(lattice, forest)?);
    info!(
        interactions = summary.interactions,
        total_weight = summary.total_weight,
        "survey complete"
    );
    Ok(summary)
}

/// Loose per-term bound: 2·(log2(segment_size) + segments) + 2
pub fn loose_weight_bound(forest: &EncodingForest) -> usize {
    let depth = forest.tree_size().max(1).ilog2() as usize;
    2 * (depth + forest.num_segments()) + 2
}
