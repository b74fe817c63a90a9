//! Grid sizes and the fleet composition assigned to each of them.

use crate::vessel::VesselClass;

/// Grid sizes a match can be created with. The 5x5 grid is kept for the
/// legacy fleet definition; the CLI only offers 10, 15 and 20.
pub const SUPPORTED_GRIDS: [usize; 4] = [5, 10, 15, 20];

const FLEET_5: [VesselClass; 4] = [
    VesselClass::Carrier,
    VesselClass::Battleship,
    VesselClass::Submarine,
    VesselClass::Destroyer,
];

const FLEET_10: [VesselClass; 5] = [
    VesselClass::Patrol,
    VesselClass::Battleship,
    VesselClass::Destroyer,
    VesselClass::Carrier,
    VesselClass::Submarine,
];

const FLEET_15: [VesselClass; 7] = [
    VesselClass::Patrol,
    VesselClass::Battleship,
    VesselClass::Destroyer,
    VesselClass::Destroyer,
    VesselClass::Carrier,
    VesselClass::Submarine,
    VesselClass::Submarine,
];

const FLEET_20: [VesselClass; 10] = [
    VesselClass::Patrol,
    VesselClass::Battleship,
    VesselClass::Destroyer,
    VesselClass::Carrier,
    VesselClass::Submarine,
    VesselClass::Patrol,
    VesselClass::Battleship,
    VesselClass::Destroyer,
    VesselClass::Carrier,
    VesselClass::Submarine,
];

/// Fleet composition for a grid size, or `None` for unsupported sizes.
pub fn fleet_classes(grid: usize) -> Option<&'static [VesselClass]> {
    match grid {
        5 => Some(&FLEET_5),
        10 => Some(&FLEET_10),
        15 => Some(&FLEET_15),
        20 => Some(&FLEET_20),
        _ => None,
    }
}

/// Total number of vessel segments in the fleet for a grid size.
pub fn fleet_cells(grid: usize) -> Option<usize> {
    fleet_classes(grid).map(|fleet| fleet.iter().map(|c| c.length()).sum())
}
