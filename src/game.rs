//! A full match: both sides, lifecycle phase, timing and turn resolution.

use rand::rngs::SmallRng;

use crate::combatant::Combatant;
use crate::common::{Coord, EngineError, ShotOutcome};
use crate::opponent::{Opponent, OpponentState};
use crate::targeting::Difficulty;

/// Lifecycle phase of a match, driven by the caller. The view layer keys
/// its visible panel off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Welcome,
    NewGame,
    /// Reserved, never entered.
    SetNames,
    SetShips,
    Battle,
}

/// What happened in one resolved turn, returned to the caller instead of
/// an observer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Outcome of the player's shot on the opponent's grid.
    pub player_shot: ShotOutcome,
    /// The counter-shot and its outcome; absent when the opponent was
    /// defeated by the player's shot.
    pub counter_shot: Option<(Coord, ShotOutcome)>,
}

/// Serializable snapshot of a whole match. The dirty flag is not part of
/// it: a freshly loaded match is always unsaved-changes-free.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub player: Combatant,
    pub opponent: OpponentState,
    pub grid_size: usize,
    pub phase: Phase,
    pub timed: bool,
    pub seconds_left: u32,
    pub player_outcome: ShotOutcome,
}

/// One human-controlled combatant against one automated opponent.
#[derive(Debug)]
pub struct Match {
    player: Combatant,
    opponent: Opponent,
    grid_size: usize,
    phase: Phase,
    timed: bool,
    seconds_left: u32,
    player_outcome: ShotOutcome,
    just_saved: bool,
}

impl Match {
    /// Create a match with default-named sides for `grid`.
    pub fn new(grid: usize, difficulty: Difficulty) -> Result<Self, EngineError> {
        let player = Combatant::new("Player", grid)?;
        let opponent = Opponent::new(grid, difficulty)?;
        Self::from_sides(player, opponent, grid, false, 0)
    }

    /// Assemble a match from prepared sides.
    pub fn from_sides(
        player: Combatant,
        opponent: Opponent,
        grid_size: usize,
        timed: bool,
        seconds: u32,
    ) -> Result<Self, EngineError> {
        if player.grid_size() != grid_size || opponent.grid_size() != grid_size {
            return Err(EngineError::GridSizeMismatch {
                player: player.grid_size(),
                opponent: opponent.grid_size(),
            });
        }
        Ok(Match {
            player,
            opponent,
            grid_size,
            phase: Phase::Welcome,
            timed,
            seconds_left: seconds,
            player_outcome: ShotOutcome::Water,
            just_saved: false,
        })
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Combatant {
        &mut self.player
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    pub fn opponent_mut(&mut self) -> &mut Opponent {
        &mut self.opponent
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move the lifecycle forward (or back). Any phase change invalidates
    /// the just-saved flag.
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.just_saved = false;
    }

    pub fn is_timed(&self) -> bool {
        self.timed
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    /// The countdown component writes the remaining time back here.
    pub fn set_seconds_left(&mut self, seconds: u32) {
        self.seconds_left = seconds;
    }

    pub fn set_timed(&mut self, timed: bool, seconds: u32) {
        self.timed = timed;
        self.seconds_left = seconds;
    }

    /// True from a successful save until the next mutation.
    pub fn is_just_saved(&self) -> bool {
        self.just_saved
    }

    /// Replace the whole match state in one step: new sides, grid and
    /// timer. The lifecycle phase is left for the caller to advance.
    pub fn start_new_match(
        &mut self,
        player: Combatant,
        opponent: Opponent,
        grid_size: usize,
        timed: bool,
        seconds: u32,
    ) -> Result<(), EngineError> {
        if player.grid_size() != grid_size || opponent.grid_size() != grid_size {
            return Err(EngineError::GridSizeMismatch {
                player: player.grid_size(),
                opponent: opponent.grid_size(),
            });
        }
        self.player = player;
        self.opponent = opponent;
        self.grid_size = grid_size;
        self.timed = timed;
        self.seconds_left = seconds;
        self.player_outcome = ShotOutcome::Water;
        self.just_saved = false;
        Ok(())
    }

    /// Resolve one turn: the player fires at the opponent, and only if the
    /// opponent survives does it fire back, its strategy fed the player's
    /// outcome after the previous counter-shot. The player always fires
    /// first; a defeated opponent never returns fire.
    pub fn resolve_turn(
        &mut self,
        rng: &mut SmallRng,
        row: usize,
        col: usize,
    ) -> Result<TurnReport, EngineError> {
        let player_shot = self.opponent.receive_hit(row, col)?;
        self.just_saved = false;
        let mut counter_shot = None;
        if !self.opponent.is_defeated() {
            if let Some(shot) = self.opponent.compute_shot(rng, self.player_outcome) {
                let outcome = self.player.receive_hit(shot.row, shot.col)?;
                self.player_outcome = outcome;
                counter_shot = Some((shot, outcome));
            }
        }
        Ok(TurnReport {
            player_shot,
            counter_shot,
        })
    }

    /// Serializable snapshot of the match.
    pub fn snapshot(&self) -> MatchState {
        MatchState {
            player: self.player.clone(),
            opponent: self.opponent.snapshot(),
            grid_size: self.grid_size,
            phase: self.phase,
            timed: self.timed,
            seconds_left: self.seconds_left,
            player_outcome: self.player_outcome,
        }
    }

    /// Rebuild a match from a snapshot.
    pub fn from_state(state: MatchState) -> Self {
        Match {
            player: state.player,
            opponent: Opponent::from_state(state.opponent),
            grid_size: state.grid_size,
            phase: state.phase,
            timed: state.timed,
            seconds_left: state.seconds_left,
            player_outcome: state.player_outcome,
            just_saved: false,
        }
    }
}

/// Structural equality over the persisted state; the dirty flag is
/// transient and excluded.
impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

#[cfg(feature = "std")]
mod persistence {
    use std::path::Path;

    use super::Match;
    use crate::store::{self, StoreError};

    impl Match {
        /// True when a snapshot exists under the default save name.
        pub fn saved_match_exists() -> bool {
            store::exists(Path::new(store::DEFAULT_SAVE_NAME))
        }

        /// Save under the default name and mark the match clean.
        pub fn save(&mut self) -> Result<(), StoreError> {
            self.save_to(Path::new(store::DEFAULT_SAVE_NAME))
        }

        /// Save to an explicit path and mark the match clean.
        pub fn save_to(&mut self, path: &Path) -> Result<(), StoreError> {
            store::write_snapshot(&self.snapshot(), path)?;
            self.just_saved = true;
            Ok(())
        }

        /// Load the snapshot saved under the default name.
        pub fn load() -> Result<Match, StoreError> {
            Self::load_from(Path::new(store::DEFAULT_SAVE_NAME))
        }

        /// Load a snapshot from an explicit path.
        pub fn load_from(path: &Path) -> Result<Match, StoreError> {
            Ok(Match::from_state(store::read_snapshot(path)?))
        }
    }
}
