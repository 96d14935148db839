//! Persisted game state.
//!
//! `WireState` is what the persistence collaborator stores verbatim after
//! every accepted turn. `Game::from_wire` rebuilds the engine from it,
//! resolving the active player by direct lookup.

use serde::{Deserialize, Serialize};

use crate::cards::Combo;
use crate::core::{GameConfig, Player, Result, Seating, TurnError};
use crate::rules::{Game, Status};
use crate::zones::Deck;

use super::codec::{decode_stored, encode_cards, WireCard};

/// Flat, fully-revealed game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireState {
    pub active_player_id: String,
    pub players: Vec<(String, Vec<WireCard>)>,
    pub enemy_deck: Vec<WireCard>,
    pub tavern_deck: Vec<WireCard>,
    pub discard_deck: Vec<WireCard>,
    pub played_combos: Vec<Vec<WireCard>>,
    pub status: Status,
    pub turn: u32,
}

impl WireState {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Game {
    /// Flatten the game for storage.
    #[must_use]
    pub fn to_wire(&self) -> WireState {
        WireState {
            active_player_id: self.active_player().id.to_string(),
            players: self
                .players()
                .iter()
                .map(|p| (p.id.to_string(), encode_cards(p.hand().iter().copied())))
                .collect(),
            enemy_deck: encode_cards(self.enemy_deck.iter()),
            tavern_deck: encode_cards(self.tavern_deck.iter()),
            discard_deck: encode_cards(self.discard_deck.iter()),
            played_combos: self
                .played_combos
                .iter()
                .map(|combo| encode_cards(combo.iter().copied()))
                .collect(),
            status: self.status,
            turn: self.turn,
        }
    }

    /// Rebuild a game with the default configuration.
    pub fn from_wire(wire: &WireState) -> Result<Self> {
        Self::from_wire_with(wire, GameConfig::default())
    }

    /// Rebuild a game; `config` supplies hand size and RNG seed.
    ///
    /// Hands larger than `config.max_hand_size` are rejected.
    pub fn from_wire_with(wire: &WireState, config: GameConfig) -> Result<Self> {
        if wire.players.is_empty() {
            return Err(TurnError::NoPlayers);
        }
        config.validate()?;

        let players = wire
            .players
            .iter()
            .map(|(id, hand)| {
                if hand.len() > config.max_hand_size {
                    return Err(TurnError::InvalidWireState(format!(
                        "player {id:?} holds {} cards, at most {} allowed",
                        hand.len(),
                        config.max_hand_size
                    )));
                }
                let hand = decode_stored(hand, "players")?;
                Ok(Player::new(id.as_str(), config.max_hand_size).with_hand(hand))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut seating = Seating::new(players)?;
        if !seating.set_active(&wire.active_player_id) {
            return Err(TurnError::InvalidWireState(format!(
                "active player {:?} is not seated",
                wire.active_player_id
            )));
        }

        let enemy_deck = Deck::from_cards(decode_stored(&wire.enemy_deck, "enemy_deck")?);
        if let Some(card) = enemy_deck.iter().find(|card| !card.rank.is_face()) {
            return Err(TurnError::InvalidWireState(format!("{card} cannot be an enemy")));
        }

        let played_combos = wire
            .played_combos
            .iter()
            .map(|combo| decode_stored(combo, "played_combos").map(Combo::from_vec))
            .collect::<Result<Vec<_>>>()?;

        Ok(Game {
            seating,
            turn: wire.turn,
            tavern_deck: Deck::from_cards(decode_stored(&wire.tavern_deck, "tavern_deck")?),
            enemy_deck,
            discard_deck: Deck::from_cards(decode_stored(&wire.discard_deck, "discard_deck")?),
            played_combos,
            status: wire.status,
            rng: config.rng(),
            config,
        })
    }
}
