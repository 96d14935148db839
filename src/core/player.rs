//! Players and turn order.
//!
//! ## PlayerId
//!
//! Opaque string identifier supplied by the lobby.
//!
//! ## Seating
//!
//! The fixed cyclic player order plus an index to the active player.
//! Advancing is `(index + 1) % len`; resolving a stored id is a lookup.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{combo_damage, Card};
use crate::core::error::{Result, TurnError};
use crate::core::rng::GameRng;

/// Opaque player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A player and their hand.
///
/// The hand has multiset semantics; its order is arrival order unless
/// `sort_hand` is called.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    hand: Vec<Card>,
    max_hand_size: usize,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: impl Into<PlayerId>, max_hand_size: usize) -> Self {
        Self {
            id: id.into(),
            hand: Vec::new(),
            max_hand_size,
        }
    }

    /// Replace the hand.
    #[must_use]
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Card>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    /// Current hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Hand size cap.
    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    /// Free slots left in the hand.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_hand_size.saturating_sub(self.hand.len())
    }

    /// True if the hand is at (or above) the cap.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity() == 0
    }

    /// Total attack of every card in hand.
    #[must_use]
    pub fn hand_damage(&self) -> u32 {
        combo_damage(&self.hand)
    }

    /// Check that every card of `cards` is held, counting duplicates.
    ///
    /// Returns the first card that cannot be matched.
    pub fn check_holds(&self, cards: &[Card]) -> Result<()> {
        let mut remaining = self.hand.clone();
        for &card in cards {
            match remaining.iter().position(|&held| held == card) {
                Some(pos) => {
                    remaining.swap_remove(pos);
                }
                None => return Err(TurnError::CardNotInHand(card)),
            }
        }
        Ok(())
    }

    /// Remove `cards` from the hand. All-or-nothing.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<()> {
        self.check_holds(cards)?;
        for card in cards {
            if let Some(pos) = self.hand.iter().position(|held| held == card) {
                self.hand.remove(pos);
            }
        }
        Ok(())
    }

    /// Add a card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Sort the hand (rank, then suit) for stable presentation.
    pub fn sort_hand(&mut self) {
        self.hand.sort();
    }
}

/// Fixed cyclic player order with the active player's index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seating {
    players: Vec<Player>,
    active: usize,
}

impl Seating {
    /// Seat players in the given order, first player active.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(TurnError::NoPlayers);
        }
        Ok(Self { players, active: 0 })
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false: seating holds at least one player.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seat index of the active player.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active player.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active]
    }

    /// The active player, mutably.
    pub fn active_mut(&mut self) -> &mut Player {
        &mut self.players[self.active]
    }

    /// Seat index of the player with `id`.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id.as_str() == id)
    }

    /// Player with `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id.as_str() == id)
    }

    /// Make the player with `id` active.
    ///
    /// Returns false (and changes nothing) if no such player is seated.
    pub fn set_active(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Seat after `index`, wrapping around.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.players.len()
    }

    /// Pass the turn to the next seat.
    pub fn advance(&mut self) {
        self.active = self.next_index(self.active);
    }

    /// Randomize seat order once; the first seat becomes active.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.players);
        self.active = 0;
    }

    /// Free hand slots across the table.
    #[must_use]
    pub fn total_capacity(&self) -> usize {
        self.players.iter().map(Player::capacity).sum()
    }

    /// Deal `cards` one at a time, starting at seat `start` and skipping
    /// full hands.
    ///
    /// Callers cap `cards` at `total_capacity()`; surplus cards are returned.
    pub fn deal_round_robin(&mut self, start: usize, cards: Vec<Card>) -> Vec<Card> {
        let mut seat = start % self.players.len();
        let mut cards = cards.into_iter();
        while self.total_capacity() > 0 {
            let Some(card) = cards.next() else {
                break;
            };
            while self.players[seat].is_full() {
                seat = self.next_index(seat);
            }
            self.players[seat].receive(card);
            seat = self.next_index(seat);
        }
        cards.collect()
    }

    /// Iterate players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate players mutably in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

impl Index<usize> for Seating {
    type Output = Player;

    fn index(&self, seat: usize) -> &Self::Output {
        &self.players[seat]
    }
}

impl IndexMut<usize> for Seating {
    fn index_mut(&mut self, seat: usize) -> &mut Self::Output {
        &mut self.players[seat]
    }
}
