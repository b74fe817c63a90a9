//! Vessel definitions and placement rules.

use crate::common::Coord;
use crate::mask::CellMask;

/// Direction a vessel extends in from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Class of vessel, fixing its name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselClass {
    Patrol,
    Destroyer,
    Submarine,
    Battleship,
    Carrier,
}

impl VesselClass {
    /// Number of grid cells the class occupies.
    pub const fn length(&self) -> usize {
        match self {
            VesselClass::Patrol => 2,
            VesselClass::Destroyer => 2,
            VesselClass::Submarine => 3,
            VesselClass::Battleship => 4,
            VesselClass::Carrier => 5,
        }
    }

    /// Display name of the class.
    pub const fn name(&self) -> &'static str {
        match self {
            VesselClass::Patrol => "Patrol",
            VesselClass::Destroyer => "Destroyer",
            VesselClass::Submarine => "Submarine",
            VesselClass::Battleship => "Battleship",
            VesselClass::Carrier => "Carrier",
        }
    }
}

/// A vessel on an `n`×`n` grid, its intact segments tracked in a `CellMask`.
///
/// `cells` is empty until the vessel is placed and shrinks as hits land;
/// an empty mask on a placed vessel means sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vessel {
    class: VesselClass,
    grid: usize,
    cells: CellMask,
    placement: Option<(Coord, Direction)>,
}

impl Vessel {
    /// Create an unplaced vessel for a grid of side `grid`.
    pub fn new(class: VesselClass, grid: usize) -> Self {
        Vessel {
            class,
            grid,
            cells: CellMask::new(grid),
            placement: None,
        }
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    /// Anchor and direction, once placed.
    pub fn placement(&self) -> Option<(Coord, Direction)> {
        self.placement
    }

    /// Mask of the vessel's intact segments.
    pub fn cells(&self) -> CellMask {
        self.cells
    }

    /// Try to seat the vessel with its anchor at (`row`, `col`), extending
    /// right (horizontal) or down (vertical). The footprint must stay on the
    /// grid and the footprint plus a one-cell ring around it (clamped at the
    /// edges) must be free in `board`. On success the footprint is recorded
    /// in the vessel's own cells and OR-ed into `board`; on failure neither
    /// is touched.
    pub fn attempt_place(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
        board: &mut CellMask,
    ) -> bool {
        let len = self.class.length();
        let n = self.grid;
        if row >= n || col >= n {
            return false;
        }
        let (row_end, col_end) = match direction {
            Direction::Horizontal => (row, col + len - 1),
            Direction::Vertical => (row + len - 1, col),
        };
        if row_end >= n || col_end >= n {
            return false;
        }
        if !clearance(board, row, col, row_end, col_end) {
            return false;
        }
        for i in 0..len {
            let (r, c) = match direction {
                Direction::Horizontal => (row, col + i),
                Direction::Vertical => (row + i, col),
            };
            let _ = self.cells.set(r, c);
            let _ = board.set(r, c);
        }
        self.placement = Some((Coord::new(row, col), direction));
        true
    }

    /// Register an incoming shot. Returns `true` iff the cell held an
    /// intact segment, which is cleared.
    pub fn absorb_hit(&mut self, row: usize, col: usize) -> bool {
        if self.cells.get(row, col).unwrap_or(false) {
            let _ = self.cells.clear(row, col);
            true
        } else {
            false
        }
    }

    /// True when no intact segment remains. Only meaningful for a placed
    /// vessel; an unplaced one has no segments at all.
    pub fn is_sunk(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the vessel to its pristine unplaced state.
    pub fn reset(&mut self) {
        self.cells.clear_all();
        self.placement = None;
    }
}

/// Footprint rectangle plus a clamped one-cell ring must be free.
fn clearance(board: &CellMask, row: usize, col: usize, row_end: usize, col_end: usize) -> bool {
    let n = board.side();
    let r1 = (row_end + 1).min(n - 1);
    let c1 = (col_end + 1).min(n - 1);
    for r in row.saturating_sub(1)..=r1 {
        for c in col.saturating_sub(1)..=c1 {
            if board.get(r, c).unwrap_or(false) {
                return false;
            }
        }
    }
    true
}
