use segmented_fenwick::{EncodingConfig, EncodingForest, Lattice};

/// Forest and lattice for a `side × side` grid of four-mode segments.
pub fn square(side: usize) -> (EncodingForest, Lattice) {
    let config = EncodingConfig::square_lattice(side);
    let forest = EncodingForest::build(&config).expect("forest builds");
    let lattice = Lattice::embed(&forest, config.lattice_width).expect("lattice embeds");
    (forest, lattice)
}
