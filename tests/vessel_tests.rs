use broadside::{CellMask, Coord, Direction, Vessel, VesselClass};

#[test]
fn test_place_and_footprint() {
    let mut board = CellMask::new(10);
    let mut vessel = Vessel::new(VesselClass::Submarine, 10);

    assert!(vessel.attempt_place(2, 1, Direction::Horizontal, &mut board));
    for c in 1..4 {
        assert!(vessel.cells().get(2, c).unwrap());
        assert!(board.get(2, c).unwrap());
    }
    assert_eq!(board.count_ones(), 3);
    assert_eq!(
        vessel.placement(),
        Some((Coord::new(2, 1), Direction::Horizontal))
    );
}

#[test]
fn test_place_out_of_bounds_fails() {
    let mut board = CellMask::new(10);
    let mut vessel = Vessel::new(VesselClass::Carrier, 10);

    // anchor on the grid but the tail hangs off
    assert!(!vessel.attempt_place(0, 6, Direction::Horizontal, &mut board));
    assert!(!vessel.attempt_place(6, 0, Direction::Vertical, &mut board));
    // anchor off the grid
    assert!(!vessel.attempt_place(10, 0, Direction::Horizontal, &mut board));

    assert!(board.is_empty());
    assert!(vessel.cells().is_empty());
    assert_eq!(vessel.placement(), None);
}

#[test]
fn test_adjacent_placement_fails() {
    let mut board = CellMask::new(10);
    let mut first = Vessel::new(VesselClass::Destroyer, 10);
    assert!(first.attempt_place(0, 0, Direction::Horizontal, &mut board));

    // overlapping, touching sideways and touching diagonally all fail
    let mut second = Vessel::new(VesselClass::Submarine, 10);
    assert!(!second.attempt_place(0, 1, Direction::Horizontal, &mut board));
    assert!(!second.attempt_place(0, 2, Direction::Horizontal, &mut board));
    assert!(!second.attempt_place(1, 2, Direction::Vertical, &mut board));

    // the board still carries only the first footprint
    assert_eq!(board.count_ones(), first.length());
    assert!(second.cells().is_empty());

    // one cell of water between them is enough
    assert!(second.attempt_place(0, 4, Direction::Horizontal, &mut board));
}

#[test]
fn test_clearance_clamps_at_edges() {
    let mut board = CellMask::new(10);
    let mut vessel = Vessel::new(VesselClass::Patrol, 10);

    // corner anchor: the ring has nowhere to extend up or left
    assert!(vessel.attempt_place(0, 0, Direction::Horizontal, &mut board));

    let mut other = Vessel::new(VesselClass::Patrol, 10);
    assert!(other.attempt_place(9, 8, Direction::Horizontal, &mut board));
}

#[test]
fn test_absorb_hit_and_sunk() {
    let mut board = CellMask::new(10);
    let mut vessel = Vessel::new(VesselClass::Destroyer, 10);
    assert!(vessel.attempt_place(1, 1, Direction::Horizontal, &mut board));

    assert!(!vessel.is_sunk());
    assert!(vessel.absorb_hit(1, 1));
    assert!(!vessel.is_sunk());
    // the same cell again is no longer a hit
    assert!(!vessel.absorb_hit(1, 1));
    // a cell the vessel never occupied
    assert!(!vessel.absorb_hit(5, 5));

    assert!(vessel.absorb_hit(1, 2));
    assert!(vessel.is_sunk());
}

#[test]
fn test_reset_restores_pristine_state() {
    let mut board = CellMask::new(10);
    let mut vessel = Vessel::new(VesselClass::Battleship, 10);
    assert!(vessel.attempt_place(4, 4, Direction::Vertical, &mut board));
    assert!(vessel.absorb_hit(4, 4));

    vessel.reset();
    assert!(vessel.cells().is_empty());
    assert_eq!(vessel.placement(), None);

    // the vessel can be seated again on a fresh board
    let mut board = CellMask::new(10);
    assert!(vessel.attempt_place(0, 0, Direction::Horizontal, &mut board));
    assert_eq!(vessel.cells().count_ones(), vessel.length());
}

#[test]
fn test_class_lengths() {
    assert_eq!(VesselClass::Patrol.length(), 2);
    assert_eq!(VesselClass::Destroyer.length(), 2);
    assert_eq!(VesselClass::Submarine.length(), 3);
    assert_eq!(VesselClass::Battleship.length(), 4);
    assert_eq!(VesselClass::Carrier.length(), 5);
}
