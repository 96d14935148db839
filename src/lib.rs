//! # regicide-engine
//!
//! Rules engine for Regicide, a cooperative card battler for 1-4 players
//! against a castle of twelve face-card enemies.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: `apply_turn` runs every check before it
//!    touches anything. A rejected turn returns an error and leaves the
//!    game as it was.
//!
//! 2. **Turns are values**: a turn returns a new `Game`. Piles are
//!    persistent vectors, so the clone is cheap.
//!
//! 3. **Strict card boundary**: gameplay works on `Card` only. Rank codes
//!    and suit glyphs are parsed in `wire::codec` and nowhere else.
//!
//! 4. **Injectable randomness**: every shuffle draws from `GameRng`, seeded
//!    through `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: players, seating, RNG, configuration, errors
//! - `cards`: suits, ranks, cards and combo arithmetic
//! - `zones`: decks
//! - `rules`: the game, validation, the turn processor
//! - `wire`: persisted state, client payloads, redacted views
//! - `session`: rooms over a pluggable turn store
//!
//! ## Example
//!
//! ```
//! use regicide_engine::{Game, GameConfig, Status};
//!
//! let game = Game::start(&["alice", "bob"], GameConfig::default().with_seed(7)).unwrap();
//! let active = game.active_player().id.to_string();
//! let skip: [(&str, &str); 0] = [];
//!
//! let next = game.apply_turn(&active, &skip).unwrap();
//! assert_eq!(next.turn(), 2);
//! assert_ne!(next.status(), Status::Created);
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod wire;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, Player, PlayerId, Result, Seating, TurnError,
    DEFAULT_MAX_HAND_SIZE, DEFAULT_MAX_PLAYERS, MAX_HAND_SIZE_LIMIT, TAVERN_SIZE,
};

pub use crate::cards::{Card, Combo, Rank, Suit};

pub use crate::zones::Deck;

pub use crate::rules::{Encounter, Game, Status};

pub use crate::wire::{EnemyView, HandView, PlayerView, TurnPayload, WireCard, WireState};

pub use crate::session::{MemoryTurnStore, Room, TurnStore};
