//! Ordered card piles: tavern, castle and discard.
//!
//! Index 0 is the top of the deck. Draws come off the top, returned
//! cards go to the bottom. Backed by `im::Vector` so whole-game clones
//! share structure.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::error::{Result, TurnError};
use crate::core::rng::GameRng;

/// An ordered sequence of cards.
///
/// ## Usage
///
/// ```
/// use regicide_engine::cards::{Card, Rank, Suit};
/// use regicide_engine::zones::Deck;
///
/// let mut deck = Deck::from_cards([
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Ace, Suit::Hearts),
/// ]);
///
/// assert_eq!(deck.peek(), Some(Card::new(Rank::Two, Suit::Clubs)));
/// deck.push_bottom(Card::new(Rank::Five, Suit::Spades));
/// assert_eq!(deck.pop_many(2).unwrap().len(), 2);
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards listed top first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The 40-card player deck: 2-10 and aces in every suit, shuffled.
    #[must_use]
    pub fn tavern(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Rank::TAVERN
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// The 12-card castle: jacks, then queens, then kings.
    ///
    /// Each rank group is shuffled on its own; the group order is fixed.
    #[must_use]
    pub fn castle(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(Rank::ENEMIES.len() * Suit::ALL.len());
        for rank in Rank::ENEMIES {
            let mut group: Vec<Card> = Suit::ALL.iter().map(|&suit| Card::new(rank, suit)).collect();
            rng.shuffle(&mut group);
            cards.extend(group);
        }
        Self::from_cards(cards)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(TurnError::EmptyDeck)
    }

    /// Remove and return the top `count` cards, top first.
    ///
    /// Fails without touching the deck if it holds fewer than `count`.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<Card>> {
        if count > self.cards.len() {
            return Err(TurnError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }
        let rest = self.cards.split_off(count);
        let taken = std::mem::replace(&mut self.cards, rest);
        Ok(taken.into_iter().collect())
    }

    /// Put a card on the bottom.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Put cards on the bottom, keeping their order.
    pub fn extend_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Put a card on the top.
    pub fn push_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Uniformly permute the deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Empty the deck, returning how many cards it held.
    pub fn clear(&mut self) -> usize {
        let size = self.cards.len();
        self.cards.clear();
        size
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// True if the deck contains the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn sample() -> Deck {
        Deck::from_cards([
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Spades),
        ])
    }

    #[test]
    fn test_peek_and_pop() {
        let mut deck = sample();
        assert_eq!(deck.peek(), Some(card(Rank::Two, Suit::Clubs)));
        assert_eq!(deck.pop(), Ok(card(Rank::Two, Suit::Clubs)));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_pop_empty() {
        let mut deck = Deck::new();
        assert_eq!(deck.peek(), None);
        assert_eq!(deck.pop(), Err(TurnError::EmptyDeck));
    }

    #[test]
    fn test_pop_many() {
        let mut deck = sample();
        let taken = deck.pop_many(2).unwrap();
        assert_eq!(taken, vec![card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Hearts)]);
        assert_eq!(deck.iter().collect::<Vec<_>>(), vec![card(Rank::Four, Suit::Spades)]);

        assert_eq!(deck.pop_many(0).unwrap(), vec![]);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_pop_many_insufficient_leaves_deck() {
        let mut deck = sample();
        assert_eq!(
            deck.pop_many(4),
            Err(TurnError::InsufficientCards { requested: 4, available: 3 })
        );
        assert_eq!(deck, sample());
    }

    #[test]
    fn test_top_and_bottom() {
        let mut deck = sample();
        deck.push_bottom(card(Rank::Ace, Suit::Clubs));
        deck.push_top(card(Rank::Jack, Suit::Diamonds));
        deck.extend_bottom([card(Rank::Nine, Suit::Clubs), card(Rank::Ten, Suit::Clubs)]);

        let cards: Vec<_> = deck.iter().collect();
        assert_eq!(cards.first(), Some(&card(Rank::Jack, Suit::Diamonds)));
        assert_eq!(&cards[4..], &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Ten, Suit::Clubs),
        ]);
    }

    #[test]
    fn test_clear() {
        let mut deck = sample();
        assert_eq!(deck.clear(), 3);
        assert!(deck.is_empty());
        assert_eq!(deck.clear(), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::tavern(&mut rng);
        let mut before: Vec<_> = deck.iter().collect();

        deck.shuffle(&mut rng);
        let mut after: Vec<_> = deck.iter().collect();

        assert_ne!(before, after);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_tavern_deck() {
        let mut rng = GameRng::new(7);
        let deck = Deck::tavern(&mut rng);

        assert_eq!(deck.len(), 40);
        assert!(deck.iter().all(|c| !c.rank.is_face()));
        let mut cards: Vec<_> = deck.iter().collect();
        cards.sort();
        cards.dedup();
        assert_eq!(cards.len(), 40);
    }

    #[test]
    fn test_castle_order() {
        let mut rng = GameRng::new(7);
        let deck = Deck::castle(&mut rng);
        let cards: Vec<_> = deck.iter().collect();

        assert_eq!(cards.len(), 12);
        assert!(cards[..4].iter().all(|c| c.rank == Rank::Jack));
        assert!(cards[4..8].iter().all(|c| c.rank == Rank::Queen));
        assert!(cards[8..].iter().all(|c| c.rank == Rank::King));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = Deck::tavern(&mut GameRng::new(3));
        let b = Deck::tavern(&mut GameRng::new(3));
        assert_eq!(a, b);
    }
}
