//! Core engine types: players, RNG, configuration, errors.
//!
//! This module contains the building blocks the rules sit on.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    GameConfig, DEFAULT_MAX_HAND_SIZE, DEFAULT_MAX_PLAYERS, MAX_HAND_SIZE_LIMIT, TAVERN_SIZE,
};
pub use error::{Result, TurnError};
pub use player::{Player, PlayerId, Seating};
pub use rng::GameRng;
