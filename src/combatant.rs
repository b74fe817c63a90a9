//! One side of a match: grids, fleet lists and combat state.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::common::{EngineError, ShotOutcome};
use crate::config;
use crate::mask::CellMask;
use crate::vessel::{Direction, Vessel};

/// Random draws tried per vessel before falling back to a scan.
const MAX_RANDOM_TRIES: usize = 1_000;

/// A combatant owns three same-size masks and its fleet, partitioned by
/// lifecycle stage: waiting to be placed, placed, destroyed.
///
/// `live` holds the intact, unhit vessel segments and is the defeat
/// criterion; `layout` is the permanent record of where vessels were
/// placed; `incoming` accumulates every shot received.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    grid: usize,
    outcome: ShotOutcome,
    live: CellMask,
    layout: CellMask,
    incoming: CellMask,
    waiting: Vec<Vessel>,
    placed: Vec<Vessel>,
    destroyed: Vec<Vessel>,
    timed_out: bool,
}

impl Combatant {
    /// Create a combatant with the fleet defined for `grid`.
    pub fn new(name: impl Into<String>, grid: usize) -> Result<Self, EngineError> {
        let classes =
            config::fleet_classes(grid).ok_or(EngineError::UnsupportedGridSize(grid))?;
        let waiting = classes.iter().map(|&c| Vessel::new(c, grid)).collect();
        Ok(Combatant {
            name: name.into(),
            grid,
            outcome: ShotOutcome::Water,
            live: CellMask::new(grid),
            layout: CellMask::new(grid),
            incoming: CellMask::new(grid),
            waiting,
            placed: Vec::new(),
            destroyed: Vec::new(),
            timed_out: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn grid_size(&self) -> usize {
        self.grid
    }

    /// Outcome of the most recent incoming shot.
    pub fn outcome(&self) -> ShotOutcome {
        self.outcome
    }

    /// Mask of intact, unhit vessel segments.
    pub fn live_mask(&self) -> CellMask {
        self.live
    }

    /// Mask of the cells vessels were originally placed on. Never cleared
    /// by hits.
    pub fn layout_mask(&self) -> CellMask {
        self.layout
    }

    /// Mask of every cell that has received a shot.
    pub fn hit_mask(&self) -> CellMask {
        self.incoming
    }

    /// Vessels not yet placed, in placement order.
    pub fn waiting(&self) -> &[Vessel] {
        &self.waiting
    }

    /// Vessels placed and not yet sunk.
    pub fn placed(&self) -> &[Vessel] {
        &self.placed
    }

    /// Vessels sunk by incoming shots.
    pub fn destroyed(&self) -> &[Vessel] {
        &self.destroyed
    }

    /// Number of placed vessels still afloat.
    pub fn vessels_afloat(&self) -> usize {
        self.placed.len()
    }

    /// Seat the waiting vessel at `index` with its anchor at (`row`,
    /// `col`). On success the footprint is mirrored into the layout mask
    /// and the vessel moves to the placed list; any failure leaves every
    /// grid and list unchanged.
    pub fn place_vessel(
        &mut self,
        index: usize,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> bool {
        let Some(vessel) = self.waiting.get_mut(index) else {
            return false;
        };
        if !vessel.attempt_place(row, col, direction, &mut self.live) {
            return false;
        }
        let vessel = self.waiting.remove(index);
        self.layout |= vessel.cells();
        self.placed.push(vessel);
        true
    }

    /// Place every waiting vessel at a uniformly random anchor and
    /// direction, always taking the first waiting vessel. Each vessel gets
    /// a bounded number of random draws before a deterministic row-major
    /// scan takes over, so the loop terminates even on crowded grids.
    pub fn place_all_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        while !self.waiting.is_empty() {
            let mut seated = false;
            for _ in 0..MAX_RANDOM_TRIES {
                let row = rng.random_range(0..self.grid);
                let col = rng.random_range(0..self.grid);
                let direction = if rng.random() {
                    Direction::Horizontal
                } else {
                    Direction::Vertical
                };
                if self.place_vessel(0, row, col, direction) {
                    seated = true;
                    break;
                }
            }
            if !seated {
                log::debug!(
                    "random placement cap reached for {}, scanning for a free slot",
                    self.waiting[0].class().name()
                );
                if !self.place_first_fit() {
                    return Err(EngineError::PlacementExhausted);
                }
            }
        }
        Ok(())
    }

    fn place_first_fit(&mut self) -> bool {
        for row in 0..self.grid {
            for col in 0..self.grid {
                for direction in [Direction::Horizontal, Direction::Vertical] {
                    if self.place_vessel(0, row, col, direction) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Move every placed vessel back to the waiting list and reset the
    /// placement masks. Calling this twice is the same as calling it once.
    pub fn clear_all_placements(&mut self) {
        while let Some(mut vessel) = self.placed.pop() {
            vessel.reset();
            self.waiting.push(vessel);
        }
        self.live.clear_all();
        self.layout.clear_all();
    }

    /// Resolve an incoming shot at (`row`, `col`).
    ///
    /// The shot is recorded and the cell cleared from the live mask whether
    /// or not anything was there; a miss leaves no segment to show. Every
    /// placed vessel is offered the hit, a confirmed hit escalates the
    /// outcome and a vessel left with no intact segment moves to the
    /// destroyed list. The final outcome becomes the combatant's state.
    pub fn receive_hit(&mut self, row: usize, col: usize) -> Result<ShotOutcome, EngineError> {
        self.incoming.set(row, col)?;
        self.live.clear(row, col)?;
        let mut outcome = ShotOutcome::Water;
        let mut i = 0;
        while i < self.placed.len() {
            if self.placed[i].absorb_hit(row, col) {
                outcome = ShotOutcome::Hit;
                if self.placed[i].is_sunk() {
                    let sunk = self.placed.remove(i);
                    self.destroyed.push(sunk);
                    outcome = ShotOutcome::HitAndSunk;
                    continue;
                }
            }
            i += 1;
        }
        self.outcome = outcome;
        Ok(outcome)
    }

    /// A combatant is defeated when no intact segment survives on the
    /// current grid.
    pub fn is_defeated(&self) -> bool {
        self.live.is_empty()
    }

    pub fn is_timed_out(&self) -> bool {
        self.timed_out
    }

    /// Set by the external countdown when the clock expires.
    pub fn set_timed_out(&mut self, timed_out: bool) {
        self.timed_out = timed_out;
    }
}
