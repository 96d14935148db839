//! Card codec: domain `Card` <-> wire `(rank_code, suit_glyph)`.
//!
//! The only place rank codes and suit glyphs are parsed. Gameplay code
//! works on `Card` exclusively.

use crate::cards::{Card, Rank, Suit};
use crate::core::{Result, TurnError};

/// A card on the wire: `("10", "♣")`.
pub type WireCard = (String, String);

/// Encode a card.
#[must_use]
pub fn encode_card(card: Card) -> WireCard {
    (card.rank.code().to_string(), card.suit.glyph().to_string())
}

/// Encode a run of cards.
pub fn encode_cards(cards: impl IntoIterator<Item = Card>) -> Vec<WireCard> {
    cards.into_iter().map(encode_card).collect()
}

/// Decode a card, `None` if either code is unknown.
#[must_use]
pub fn parse_card(rank: &str, suit: &str) -> Option<Card> {
    Some(Card::new(Rank::from_code(rank)?, Suit::from_glyph(suit)?))
}

/// Decode a card submitted in a turn.
pub fn decode_card(rank: &str, suit: &str) -> Result<Card> {
    parse_card(rank, suit)
        .ok_or_else(|| TurnError::MalformedTurnPayload(format!("unknown card ({rank:?}, {suit:?})")))
}

/// Decode a combo submitted in a turn.
pub fn decode_combo<R, S>(cards: &[(R, S)]) -> Result<Vec<Card>>
where
    R: AsRef<str>,
    S: AsRef<str>,
{
    cards
        .iter()
        .map(|(rank, suit)| decode_card(rank.as_ref(), suit.as_ref()))
        .collect()
}

/// Decode persisted cards; failures mean the stored state is corrupt.
pub(crate) fn decode_stored(cards: &[WireCard], pile: &str) -> Result<Vec<Card>> {
    cards
        .iter()
        .map(|(rank, suit)| {
            parse_card(rank, suit).ok_or_else(|| {
                TurnError::InvalidWireState(format!("unknown card ({rank:?}, {suit:?}) in {pile}"))
            })
        })
        .collect()
}
