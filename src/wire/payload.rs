//! Turn payloads as submitted by clients.
//!
//! A payload is a JSON object with an optional `cards` key holding
//! `[rank_code, suit_glyph]` pairs. A missing or empty `cards` list is a
//! skip (play phase) or an empty discard (discard phase).

use serde::Deserialize;
use serde_json::Value;

use crate::core::{Result, TurnError};
use crate::rules::Game;

use super::codec::WireCard;

/// A decoded, not yet validated, turn payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TurnPayload {
    #[serde(default)]
    pub cards: Option<Vec<WireCard>>,
}

impl TurnPayload {
    /// Parse the payload a client sent; `None` means nothing was sent.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        let value = value
            .ok_or_else(|| TurnError::MalformedTurnPayload("missing turn payload".to_string()))?;
        if !value.is_object() {
            return Err(TurnError::MalformedTurnPayload(format!(
                "turn payload must be an object, got {value}"
            )));
        }
        Self::deserialize(value).map_err(|err| TurnError::MalformedTurnPayload(err.to_string()))
    }

    /// Parse a payload from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| TurnError::MalformedTurnPayload(err.to_string()))?;
        Self::from_value(Some(&value))
    }

    /// Submitted cards; empty for a skip.
    #[must_use]
    pub fn cards(&self) -> &[WireCard] {
        self.cards.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.cards().is_empty()
    }
}

impl Game {
    /// Parse a raw payload and apply it with [`Game::apply_turn`].
    pub fn apply_payload(&self, player_id: &str, payload: Option<&Value>) -> Result<Game> {
        let payload = TurnPayload::from_value(payload)?;
        self.apply_turn(player_id, payload.cards())
    }
}
