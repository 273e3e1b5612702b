//! Fixed-geometry checks for the lattice.

use slide_core::{
    DEFAULT_SIDE_LENGTH, DETACH_MOVES, Direction, Lattice, Rail, RailLayout, SLIDE_MOVES, SimError,
    Site, modulus,
};

use crate::common;

#[test]
fn test_modulus_examples() {
    assert_eq!(modulus(-1, 100), 99);
    assert_eq!(modulus(150, 100), 50);
    assert_eq!(modulus(99, 100), 99);
    assert_eq!(modulus(-250, 100), 50);
}

#[test]
fn test_default_lattice_sizes() {
    let mut rng = common::rng(2);
    let lattice = Lattice::generate(DEFAULT_SIDE_LENGTH, RailLayout::Permutation, 30, &mut rng).unwrap();
    assert_eq!(lattice.side_length(), 100);
    assert_eq!(lattice.rails().len(), 100);
    assert_eq!(lattice.targets().len(), 30);
}

#[test]
fn test_too_many_target_lines_rejected() {
    let mut rng = common::rng(2);
    let err = Lattice::generate(10, RailLayout::Permutation, 11, &mut rng).unwrap_err();
    assert_eq!(
        err,
        SimError::InvalidTargetLines {
            requested: 11,
            side_length: 10
        }
    );
}

#[test]
fn test_slide_moves_keep_cross_section() {
    let lattice = Lattice::from_parts(5, vec![Rail::new(2, 3)], vec![Site::new(0, 2, 3)]).unwrap();
    let mut site = Site::new(4, 2, 3);
    for _ in 0..12 {
        for &dir in &SLIDE_MOVES {
            site = lattice.step(site, dir);
            assert!(lattice.on_rail(&site));
        }
        site = lattice.step(site, Direction::PlusX);
        assert!(lattice.on_rail(&site));
    }
}

#[test]
fn test_detach_moves_leave_isolated_rail() {
    let lattice = Lattice::from_parts(5, vec![Rail::new(2, 3)], vec![Site::new(0, 2, 3)]).unwrap();
    let site = Site::new(1, 2, 3);
    for &dir in &DETACH_MOVES {
        assert!(!lattice.on_rail(&lattice.step(site, dir)), "{:?} stayed on rail", dir);
    }
}

#[test]
fn test_wraparound_on_unit_lattice() {
    // With L = 1 every move wraps back onto the only site.
    let lattice = Lattice::from_parts(1, vec![Rail::new(0, 0)], vec![Site::new(0, 0, 0)]).unwrap();
    for &dir in &DETACH_MOVES {
        assert_eq!(lattice.step(Site::new(0, 0, 0), dir), Site::new(0, 0, 0));
    }
}
