//! Targeting strategies for the automated opponent.
//!
//! A strategy owns the bookkeeping for the cells it may still fire at
//! (`pool`) and the cells queued for follow-up after a confirmed hit
//! (`queue`). Pool and queue are kept disjoint: a coordinate moves from
//! one to the other, never duplicates, so every cell is fired at most once.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{Coord, ShotOutcome};

/// How wisely the opponent aims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniform draws from the untried cells, no feedback.
    Naive,
    /// Probe-and-track: concentrate fire once a vessel is found.
    Adaptive,
}

/// Serializable snapshot of a strategy's bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetingState {
    /// Cells not yet fired at.
    pub pool: Vec<Coord>,
    /// Cells queued for follow-up, discovery order.
    pub queue: Vec<Coord>,
    /// Most recent shot.
    pub last_shot: Option<Coord>,
    /// Most recent shot known to have struck an unsunk vessel.
    pub anchor: Option<Coord>,
}

/// Interface implemented by the opponent's shot selectors.
pub trait Targeting {
    /// The difficulty this strategy realizes.
    fn difficulty(&self) -> Difficulty;

    /// Choose the next shot, folding in the defender's outcome after the
    /// previous one. `None` only when every cell has been fired at.
    fn next_shot(&mut self, rng: &mut SmallRng, prev: ShotOutcome) -> Option<Coord>;

    /// Snapshot of the current bookkeeping.
    fn snapshot(&self) -> TargetingState;
}

/// Every cell of an `n`×`n` grid, row-major.
pub fn full_pool(grid: usize) -> Vec<Coord> {
    let mut pool = Vec::with_capacity(grid * grid);
    for row in 0..grid {
        for col in 0..grid {
            pool.push(Coord::new(row, col));
        }
    }
    pool
}

/// Build a fresh strategy for `difficulty` over an `n`×`n` grid.
pub fn strategy_for(difficulty: Difficulty, grid: usize) -> Box<dyn Targeting> {
    match difficulty {
        Difficulty::Naive => Box::new(RandomSearch::new(grid)),
        Difficulty::Adaptive => Box::new(ProbeAndTrack::new(grid)),
    }
}

/// Rebuild a strategy from a snapshot, e.g. when loading a saved match.
pub fn strategy_from_state(difficulty: Difficulty, state: TargetingState) -> Box<dyn Targeting> {
    match difficulty {
        Difficulty::Naive => Box::new(RandomSearch::from_state(state)),
        Difficulty::Adaptive => Box::new(ProbeAndTrack::from_state(state)),
    }
}

/// Naive strategy: uniform draws from the pool, outcome ignored.
pub struct RandomSearch {
    pool: Vec<Coord>,
    last_shot: Option<Coord>,
}

impl RandomSearch {
    pub fn new(grid: usize) -> Self {
        RandomSearch {
            pool: full_pool(grid),
            last_shot: None,
        }
    }

    pub fn from_state(mut state: TargetingState) -> Self {
        // a naive strategy holds no queue; fold any back into the pool
        state.pool.append(&mut state.queue);
        RandomSearch {
            pool: state.pool,
            last_shot: state.last_shot,
        }
    }
}

impl Targeting for RandomSearch {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Naive
    }

    fn next_shot(&mut self, rng: &mut SmallRng, _prev: ShotOutcome) -> Option<Coord> {
        if self.pool.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.pool.len());
        let shot = self.pool.swap_remove(idx);
        self.last_shot = Some(shot);
        Some(shot)
    }

    fn snapshot(&self) -> TargetingState {
        TargetingState {
            pool: self.pool.clone(),
            queue: Vec::new(),
            last_shot: self.last_shot,
            anchor: None,
        }
    }
}

/// Adaptive strategy: random search until a hit, then a cross probe around
/// it; a second hit on the same vessel locks the axis and the queue is
/// re-derived to extend that line only. A sink drains the queue and the
/// search resumes.
pub struct ProbeAndTrack {
    pool: Vec<Coord>,
    queue: Vec<Coord>,
    last_shot: Option<Coord>,
    anchor: Option<Coord>,
}

impl ProbeAndTrack {
    pub fn new(grid: usize) -> Self {
        ProbeAndTrack {
            pool: full_pool(grid),
            queue: Vec::new(),
            last_shot: None,
            anchor: None,
        }
    }

    pub fn from_state(state: TargetingState) -> Self {
        ProbeAndTrack {
            pool: state.pool,
            queue: state.queue,
            last_shot: state.last_shot,
            anchor: state.anchor,
        }
    }

    /// Apply the defender's outcome for the previous shot to the
    /// bookkeeping before the next draw.
    fn absorb_outcome(&mut self, prev: ShotOutcome) {
        match prev {
            ShotOutcome::Water => {}
            ShotOutcome::Hit => {
                let Some(last) = self.last_shot else { return };
                match self.anchor {
                    // new target acquired: probe the four neighbors
                    None => self.cross_probe(last),
                    // second hit on the same vessel: the axis is known
                    Some(anchor) => {
                        if last.row == anchor.row {
                            self.track_line(last, anchor, true);
                        } else if last.col == anchor.col {
                            self.track_line(last, anchor, false);
                        }
                    }
                }
                self.anchor = Some(last);
            }
            ShotOutcome::HitAndSunk => {
                self.pool.append(&mut self.queue);
                self.anchor = None;
            }
        }
    }

    /// Queue the untried orthogonal neighbors of `at`. Pool membership
    /// stands in for the bounds check: off-grid cells are never pooled.
    fn cross_probe(&mut self, at: Coord) {
        let mut i = 0;
        while i < self.pool.len() {
            let c = self.pool[i];
            let beside = (c.row == at.row && (c.col + 1 == at.col || c.col == at.col + 1))
                || (c.col == at.col && (c.row + 1 == at.row || c.row == at.row + 1));
            if beside {
                self.queue.push(self.pool.remove(i));
            } else {
                i += 1;
            }
        }
    }

    /// Two hits share an axis: queue the untried cells one step beyond
    /// either hit along it, then return every queued cell off that axis to
    /// the pool so a stale cross probe cannot lead the chase astray.
    fn track_line(&mut self, a: Coord, b: Coord, row_axis: bool) {
        let on_axis = |c: &Coord| if row_axis { c.row == a.row } else { c.col == a.col };
        let extends = |c: &Coord| {
            let (p, x, y) = if row_axis {
                (c.col, a.col, b.col)
            } else {
                (c.row, a.row, b.row)
            };
            p + 1 == x || p == x + 1 || p + 1 == y || p == y + 1
        };
        let mut i = 0;
        while i < self.pool.len() {
            let c = self.pool[i];
            if on_axis(&c) && extends(&c) {
                self.queue.push(self.pool.remove(i));
            } else {
                i += 1;
            }
        }
        let mut j = 0;
        while j < self.queue.len() {
            if !on_axis(&self.queue[j]) {
                self.pool.push(self.queue.remove(j));
            } else {
                j += 1;
            }
        }
    }
}

impl Targeting for ProbeAndTrack {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Adaptive
    }

    fn next_shot(&mut self, rng: &mut SmallRng, prev: ShotOutcome) -> Option<Coord> {
        self.absorb_outcome(prev);
        let shot = if self.queue.is_empty() {
            if self.pool.is_empty() {
                return None;
            }
            let idx = rng.random_range(0..self.pool.len());
            self.anchor = None;
            self.pool.swap_remove(idx)
        } else {
            let idx = rng.random_range(0..self.queue.len());
            self.queue.remove(idx)
        };
        self.last_shot = Some(shot);
        Some(shot)
    }

    fn snapshot(&self) -> TargetingState {
        TargetingState {
            pool: self.pool.clone(),
            queue: self.queue.clone(),
            last_shot: self.last_shot,
            anchor: self.anchor,
        }
    }
}
