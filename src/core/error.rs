//! Turn and game errors.
//!
//! Every rejection is local and non-transient: a failed turn leaves the
//! game untouched and the same player may resubmit a corrected turn.

use thiserror::Error;

use crate::cards::Card;
use crate::rules::Status;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TurnError>;

/// Errors produced by the engine and its boundary helpers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Game constructed with zero player ids.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// More players than the configuration allows.
    #[error("{count} players requested, at most {max} supported")]
    TooManyPlayers { count: usize, max: usize },

    /// Configuration the engine cannot deal a game from.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The same player id was listed twice.
    #[error("player {0} listed more than once")]
    DuplicatePlayer(String),

    /// Action attempted while the status does not allow it.
    #[error("action not allowed while game is {status}")]
    InvalidGameState { status: Status },

    /// Acting player is not the active player.
    #[error("it is {expected}'s turn, not {actual}'s")]
    TurnOrderViolation { expected: String, actual: String },

    /// Turn payload missing, unparseable, or holding an undecodable card.
    #[error("malformed turn payload: {0}")]
    MalformedTurnPayload(String),

    /// A combo card is not in the acting player's hand.
    #[error("card {0} is not in the player's hand")]
    CardNotInHand(Card),

    /// Two or more cards without an ace that do not form a legal set.
    #[error("cards do not form a valid pair combo")]
    InvalidPairCombo,

    /// An ace was combined with more than one other card, or with another ace.
    #[error("an ace may only be paired with exactly one other card")]
    MaxComboSizeExceeded,

    /// Discarded cards do not cover the enemy's attack.
    #[error("discarded {provided} damage, enemy attack is {required}")]
    InsufficientDiscardPower { required: u32, provided: u32 },

    /// Pop from an empty deck.
    #[error("deck is empty")]
    EmptyDeck,

    /// Batch pop larger than the deck.
    #[error("requested {requested} cards, deck holds {available}")]
    InsufficientCards { requested: usize, available: usize },

    /// Persisted state cannot be turned back into a game.
    #[error("invalid wire state: {0}")]
    InvalidWireState(String),

    /// JSON or binary encoding failure.
    #[error("codec error: {0}")]
    Codec(String),

    /// No persisted state exists for the room.
    #[error("no game stored for room {0}")]
    GameNotFound(String),

    /// Setup called on a room that already has stored turns.
    #[error("room {0} already has a game")]
    RoomAlreadySetUp(String),
}

impl TurnError {
    /// Stable code for transport layers to map onto user-visible rejections.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TurnError::NoPlayers => "no_players",
            TurnError::TooManyPlayers { .. } => "too_many_players",
            TurnError::InvalidConfig(_) => "invalid_config",
            TurnError::DuplicatePlayer(_) => "duplicate_player",
            TurnError::InvalidGameState { .. } => "invalid_game_state",
            TurnError::TurnOrderViolation { .. } => "turn_order_violation",
            TurnError::MalformedTurnPayload(_) => "malformed_turn_payload",
            TurnError::CardNotInHand(_) => "card_not_in_hand",
            TurnError::InvalidPairCombo => "invalid_pair_combo",
            TurnError::MaxComboSizeExceeded => "max_combo_size_exceeded",
            TurnError::InsufficientDiscardPower { .. } => "insufficient_discard_power",
            TurnError::EmptyDeck => "empty_deck",
            TurnError::InsufficientCards { .. } => "insufficient_cards",
            TurnError::InvalidWireState(_) => "invalid_wire_state",
            TurnError::Codec(_) => "codec",
            TurnError::GameNotFound(_) => "game_not_found",
            TurnError::RoomAlreadySetUp(_) => "room_already_set_up",
        }
    }

    /// True for deck invariant violations, which indicate an engine bug
    /// rather than a bad request.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, TurnError::EmptyDeck | TurnError::InsufficientCards { .. })
    }
}

impl From<serde_json::Error> for TurnError {
    fn from(err: serde_json::Error) -> Self {
        TurnError::Codec(err.to_string())
    }
}

impl From<bincode::Error> for TurnError {
    fn from(err: bincode::Error) -> Self {
        TurnError::Codec(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_messages() {
        let err = TurnError::CardNotInHand(Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(err.to_string(), "card 10♠ is not in the player's hand");

        let err = TurnError::InsufficientDiscardPower { required: 10, provided: 4 };
        assert_eq!(err.to_string(), "discarded 4 damage, enemy attack is 10");

        let err = TurnError::InvalidGameState { status: Status::Won };
        assert_eq!(err.to_string(), "action not allowed while game is won");
    }

    #[test]
    fn test_codes() {
        assert_eq!(TurnError::NoPlayers.code(), "no_players");
        assert_eq!(TurnError::InvalidPairCombo.code(), "invalid_pair_combo");
        assert_eq!(TurnError::MaxComboSizeExceeded.code(), "max_combo_size_exceeded");
        assert_eq!(TurnError::InvalidConfig(String::new()).code(), "invalid_config");
        assert_eq!(TurnError::RoomAlreadySetUp("r".to_string()).code(), "room_already_set_up");
    }

    #[test]
    fn test_internal_errors() {
        assert!(TurnError::EmptyDeck.is_internal());
        assert!(TurnError::InsufficientCards { requested: 3, available: 1 }.is_internal());
        assert!(!TurnError::InvalidPairCombo.is_internal());
        assert!(!TurnError::InvalidConfig(String::new()).is_internal());
    }
}
