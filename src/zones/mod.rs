//! Card piles.
//!
//! A game has three shared piles: the tavern (draw pile), the castle
//! (enemies, jacks first) and the discard pile. All are `Deck`s.

pub mod deck;

pub use deck::Deck;
