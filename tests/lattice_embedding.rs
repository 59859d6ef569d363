//! Forest construction and tile embedding scenarios

mod common;

use std::collections::HashSet;

use common::square;
use segmented_fenwick::{
    update_set, Coordinate, EncodingConfig, EncodingError, EncodingForest, Lattice, QubitId,
};

#[test]
fn sixteen_modes_on_width_four() {
    let config = EncodingConfig {
        segment_size: 4,
        total_modes: 16,
        lattice_width: 4,
    };
    let forest = EncodingForest::build(&config).expect("forest builds");
    let lattice = Lattice::embed(&forest, 4).expect("lattice embeds");

    assert_eq!(forest.num_segments(), 4);
    assert_eq!((lattice.width(), lattice.height()), (4, 4));

    let tree = forest.tree(0).expect("segment 0");
    let root = tree.root().expect("non-empty tree");
    assert!(update_set(&forest, QubitId::new(0, 0)).is_empty());
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.range(), (0, 4));

    let ranks: HashSet<usize> = tree.nodes().iter().map(|n| n.tree_rank()).collect();
    assert_eq!(ranks, HashSet::from([0, 1, 2, 3]));
}

#[test]
fn embedding_is_a_bijection() {
    let (forest, lattice) = square(12);
    assert_eq!(lattice.len(), forest.qubit_count());

    let sites: HashSet<Coordinate> = lattice.coordinates().iter().copied().collect();
    assert_eq!(sites.len(), lattice.len());

    for (qubit, &site) in forest.qubits().zip(lattice.coordinates()) {
        assert_eq!(lattice.qubit_at(site), Ok(qubit));
    }
}

#[test]
fn update_set_length_is_depth() {
    let forest = EncodingForest::with_segments(16, 3);
    for tree in forest.trees() {
        for node in 0..tree.len() {
            let qubit = QubitId::new(tree.segment_id(), node);
            assert_eq!(update_set(&forest, qubit).len(), tree.depth(node));
        }
    }
}

#[test]
fn segment_size_three_is_unsupported() {
    let config = EncodingConfig {
        segment_size: 3,
        total_modes: 48,
        lattice_width: 12,
    };
    let forest = EncodingForest::build(&config).expect("forest builds");
    assert!(matches!(
        Lattice::embed(&forest, config.lattice_width),
        Err(EncodingError::UnsupportedConfiguration(_))
    ));
}

#[test]
fn mismatched_counts_are_rejected() {
    let qubits: Vec<QubitId> = (0..6).map(|n| QubitId::new(n / 4, n % 4)).collect();
    let result = Lattice::new(3, 2, &qubits, &[0, 1, 2, 0, 1, 2], &[0, 0, 0, 1, 1]);
    assert_eq!(
        result,
        Err(EncodingError::DimensionMismatch {
            qubits: 6,
            x_coordinates: 6,
            y_coordinates: 5,
            width: 3,
            height: 2,
        })
    );
}

#[test]
fn out_of_bounds_lookup() {
    let (_, lattice) = square(4);
    assert!(matches!(
        lattice.qubit_at(Coordinate::new(0, 4)),
        Err(EncodingError::CoordinateOutOfBounds { x: 0, y: 4, .. })
    ));
}

#[test]
fn display_shows_segment_tiles() {
    let (_, lattice) = square(4);
    assert_eq!(
        lattice.to_string(),
        "[0, 0, 1, 1]\n[0, 0, 1, 1]\n[2, 2, 3, 3]\n[2, 2, 3, 3]\n"
    );
}
