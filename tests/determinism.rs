mod common;

use std::collections::HashSet;

use segmented_fenwick::aggregate;

#[test]
fn survey_is_deterministic() {
    let mut fingerprints = HashSet::new();
    for _ in 0..3 {
        let (forest, lattice) = common::square(16);
        let summary = aggregate::survey(&lattice, &forest).expect("survey succeeds");
        fingerprints.insert(summary.fingerprint);
    }
    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn parallel_survey_matches_sequential() {
    let (forest, lattice) = common::square(20);
    let sequential = aggregate::survey(&lattice, &forest).expect("survey succeeds");
    let parallel = aggregate::survey_parallel(&lattice, &forest).expect("survey succeeds");
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.fingerprint_hex(), parallel.fingerprint_hex());
}
