//! Playing cards: suits, ranks and their attack/health tables.
//!
//! Ranks 2-10 and the ace form the tavern deck (the players' cards).
//! Jacks, queens and kings form the castle: the enemies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card suit. Used only for equality and suit-power dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Wire glyph for this suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    /// Parse a wire glyph.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Suit> {
        Suit::ALL.into_iter().find(|suit| suit.glyph() == glyph)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Card rank. Declaration order doubles as sort order (ace high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, 2 through ace.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranks dealt into the tavern deck.
    pub const TAVERN: [Rank; 10] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Ace,
    ];

    /// Enemy ranks in castle order.
    pub const ENEMIES: [Rank; 3] = [Rank::Jack, Rank::Queen, Rank::King];

    /// Ranks that may be played as a set of two or more.
    pub const PAIRABLE: [Rank; 4] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five];

    /// Attack value of the rank.
    #[must_use]
    pub const fn attack(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack => 10,
            Rank::Queen => 15,
            Rank::King => 20,
            Rank::Ace => 1,
        }
    }

    /// Health of an enemy of this rank. `None` for non-face ranks.
    #[must_use]
    pub const fn health(self) -> Option<u32> {
        match self {
            Rank::Jack => Some(20),
            Rank::Queen => Some(30),
            Rank::King => Some(40),
            _ => None,
        }
    }

    /// True for jack, queen and king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// True if sets of this rank may be played together.
    #[must_use]
    pub const fn is_pairable(self) -> bool {
        matches!(self, Rank::Two | Rank::Three | Rank::Four | Rank::Five)
    }

    /// Wire code: "2".."10", "J", "Q", "K", "A".
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a wire code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|rank| rank.code() == code)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An immutable (rank, suit) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Attack value (rank table).
    #[must_use]
    pub const fn attack(self) -> u32 {
        self.rank.attack()
    }

    /// Enemy health, only defined for face cards.
    #[must_use]
    pub const fn health(self) -> Option<u32> {
        self.rank.health()
    }

    /// True if this card is an ace.
    #[must_use]
    pub fn is_ace(self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
