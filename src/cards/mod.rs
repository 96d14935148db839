//! Card model and combo arithmetic.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (rank, suit) pair
//! - `Rank`: Attack and health tables
//! - `Suit`: Power dispatch
//! - `Combo`: Cards played in one action

pub mod card;
pub mod combo;

pub use card::{Card, Rank, Suit};
pub use combo::{attack_power, combo_damage, contains_suit, spade_mitigation, triggers_power, Combo};
