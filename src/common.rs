//! Common types for the combat engine: coordinates, shot outcomes, errors.

use core::fmt;

use crate::mask::MaskError;

/// A grid coordinate, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A side's combat state after resolving an incoming shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot struck open water.
    #[default]
    Water,
    /// The shot struck an intact vessel segment.
    Hit,
    /// The shot struck the last intact segment of a vessel.
    HitAndSunk,
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Underlying mask error (out-of-bounds cell).
    Mask(MaskError),
    /// Grid size has no fleet defined for it.
    UnsupportedGridSize(usize),
    /// Random and scan placement both failed to seat a vessel.
    PlacementExhausted,
    /// The two sides of a match were built for different grid sizes.
    GridSizeMismatch { player: usize, opponent: usize },
}

impl From<MaskError> for EngineError {
    fn from(err: MaskError) -> Self {
        EngineError::Mask(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Mask(e) => write!(f, "mask error: {}", e),
            EngineError::UnsupportedGridSize(n) => {
                write!(f, "no fleet is defined for a {}x{} grid", n, n)
            }
            EngineError::PlacementExhausted => {
                write!(f, "unable to place vessel on the remaining free cells")
            }
            EngineError::GridSizeMismatch { player, opponent } => {
                write!(
                    f,
                    "sides built for different grids: {} vs {}",
                    player, opponent
                )
            }
        }
    }
}
