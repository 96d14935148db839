//! Regicide rules.
//!
//! - `game`: the `Game` value and its lifecycle
//! - `encounter`: damage bookkeeping for the current enemy
//! - `validate`: combo legality, run before any mutation
//! - `engine`: the turn processor and suit powers
//! - `legal`: enumeration of legal combos

pub mod encounter;
pub mod engine;
pub mod game;
pub mod legal;
pub mod status;
pub mod validate;

pub use encounter::Encounter;
pub use game::Game;
pub use status::Status;
pub use validate::{
    is_valid_set, validate_actor, validate_combo_shape, validate_discard, validate_play,
    validate_turn, MAX_SET_DAMAGE,
};
