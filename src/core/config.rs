//! Game configuration.
//!
//! Callers configure the engine at creation by providing a `GameConfig`.
//! Everything not carried by the wire format (hand size, seed) lives here.

use serde::{Deserialize, Serialize};

use super::error::{Result, TurnError};
use super::rng::GameRng;

/// Default maximum number of cards a player may hold.
pub const DEFAULT_MAX_HAND_SIZE: usize = 7;

/// Default maximum number of players at the table.
pub const DEFAULT_MAX_PLAYERS: usize = 4;

/// Largest hand size a configuration may ask for. Bounds the legal
/// combo enumeration at `2^16` subsets.
pub const MAX_HAND_SIZE_LIMIT: usize = 16;

/// Cards in the tavern at the deal: 2-10 and aces in four suits.
pub const TAVERN_SIZE: usize = 40;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hand size dealt at start and cap for diamond draws (default: 7).
    pub max_hand_size: usize,

    /// Largest table `Game::create` accepts (default: 4).
    pub max_players: usize,

    /// Random seed for shuffles.
    /// `None` draws from OS entropy; `Some` makes every deal reproducible.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_hand_size: DEFAULT_MAX_HAND_SIZE,
            max_players: DEFAULT_MAX_PLAYERS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the maximum hand size.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Set the maximum player count.
    #[must_use]
    pub fn with_max_players(mut self, count: usize) -> Self {
        self.max_players = count;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration on its own.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HAND_SIZE_LIMIT).contains(&self.max_hand_size) {
            return Err(TurnError::InvalidConfig(format!(
                "max_hand_size {} outside 1..={MAX_HAND_SIZE_LIMIT}",
                self.max_hand_size
            )));
        }
        if self.max_players == 0 {
            return Err(TurnError::InvalidConfig("max_players must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Check that `players` full hands can be dealt from the tavern.
    pub fn validate_table(&self, players: usize) -> Result<()> {
        self.validate()?;
        let dealt = players.saturating_mul(self.max_hand_size);
        if dealt > TAVERN_SIZE {
            return Err(TurnError::InvalidConfig(format!(
                "{players} hands of {} need {dealt} cards, the tavern holds {TAVERN_SIZE}",
                self.max_hand_size
            )));
        }
        Ok(())
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
