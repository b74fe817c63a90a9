//! The automated side: a combatant driven by a targeting strategy.

use alloc::boxed::Box;
use core::fmt;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::combatant::Combatant;
use crate::common::{Coord, EngineError, ShotOutcome};
use crate::targeting::{
    strategy_for, strategy_from_state, Difficulty, Targeting, TargetingState,
};

/// Serializable snapshot of an opponent, strategy bookkeeping included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentState {
    pub combatant: Combatant,
    pub difficulty: Difficulty,
    pub targeting: TargetingState,
}

/// A combatant paired with the strategy choosing its shots.
pub struct Opponent {
    combatant: Combatant,
    strategy: Box<dyn Targeting>,
}

impl Opponent {
    /// Create an opponent with the fleet for `grid` and a fresh strategy.
    pub fn new(grid: usize, difficulty: Difficulty) -> Result<Self, EngineError> {
        Ok(Opponent {
            combatant: Combatant::new("Computer", grid)?,
            strategy: strategy_for(difficulty, grid),
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    pub fn name(&self) -> &str {
        self.combatant.name()
    }

    pub fn grid_size(&self) -> usize {
        self.combatant.grid_size()
    }

    /// Choose the next shot against the other side, given that side's
    /// outcome after this opponent's previous shot.
    pub fn compute_shot(&mut self, rng: &mut SmallRng, prev: ShotOutcome) -> Option<Coord> {
        self.strategy.next_shot(rng, prev)
    }

    /// Strategy bookkeeping, for inspection and persistence.
    pub fn targeting_state(&self) -> TargetingState {
        self.strategy.snapshot()
    }

    /// Resolve a shot fired at this opponent.
    pub fn receive_hit(&mut self, row: usize, col: usize) -> Result<ShotOutcome, EngineError> {
        self.combatant.receive_hit(row, col)
    }

    pub fn is_defeated(&self) -> bool {
        self.combatant.is_defeated()
    }

    pub fn outcome(&self) -> ShotOutcome {
        self.combatant.outcome()
    }

    /// Randomly place the opponent's whole fleet.
    pub fn place_all_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.combatant.place_all_randomly(rng)
    }

    /// Snapshot the opponent for persistence.
    pub fn snapshot(&self) -> OpponentState {
        OpponentState {
            combatant: self.combatant.clone(),
            difficulty: self.strategy.difficulty(),
            targeting: self.strategy.snapshot(),
        }
    }

    /// Rebuild an opponent from a snapshot.
    pub fn from_state(state: OpponentState) -> Self {
        Opponent {
            combatant: state.combatant,
            strategy: strategy_from_state(state.difficulty, state.targeting),
        }
    }
}

impl fmt::Debug for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opponent")
            .field("combatant", &self.combatant)
            .field("difficulty", &self.strategy.difficulty())
            .field("targeting", &self.strategy.snapshot())
            .finish()
    }
}

impl Clone for Opponent {
    fn clone(&self) -> Self {
        Opponent::from_state(self.snapshot())
    }
}

impl PartialEq for Opponent {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}
