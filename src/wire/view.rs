//! Per-player redacted views.
//!
//! Everything public is shown: the current enemy, pile sizes and played
//! combos. Hands are shown in full only to their owner; everyone else
//! sees a size.

use serde::{Deserialize, Serialize};

use crate::rules::{Game, Status};

use super::codec::{encode_card, encode_cards, WireCard};

/// The enemy at the top of the castle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyView {
    pub card: WireCard,
    pub health: u32,
    pub attack: u32,
    pub damage_dealt: u32,
    pub health_left: u32,
    pub attack_left: u32,
}

/// One seat's hand as seen by the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub id: String,
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<WireCard>>,
}

/// What a client is sent after every turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub active_player_id: String,
    pub player_id: Option<String>,
    pub enemy: Option<EnemyView>,
    /// Enemies still waiting behind the current one.
    pub enemy_deck_size: usize,
    pub tavern_size: usize,
    pub discard_size: usize,
    pub played_combos: Vec<Vec<WireCard>>,
    pub status: Status,
    pub turn: u32,
    pub hands: Vec<HandView>,
}

impl PlayerView {
    /// The viewer's own hand, if the viewer is seated.
    #[must_use]
    pub fn own_hand(&self) -> Option<&[WireCard]> {
        let viewer = self.player_id.as_deref()?;
        self.hands
            .iter()
            .find(|seat| seat.id == viewer)
            .and_then(|seat| seat.hand.as_deref())
    }
}

impl Game {
    /// Build the view for `viewer`; `None` reveals no hands.
    #[must_use]
    pub fn to_player_view(&self, viewer: Option<&str>) -> PlayerView {
        let enemy = self.encounter().map(|encounter| EnemyView {
            card: encode_card(encounter.enemy()),
            health: encounter.health(),
            attack: encounter.attack(),
            damage_dealt: encounter.damage_dealt(),
            health_left: encounter.health_left(),
            attack_left: encounter.attack_left(),
        });

        let hands = self
            .players()
            .iter()
            .map(|player| {
                let own = viewer == Some(player.id.as_str());
                HandView {
                    id: player.id.to_string(),
                    size: player.hand_size(),
                    hand: own.then(|| encode_cards(player.hand().iter().copied())),
                }
            })
            .collect();

        PlayerView {
            active_player_id: self.active_player().id.to_string(),
            player_id: viewer.map(str::to_string),
            enemy,
            enemy_deck_size: self.enemy_deck.len().saturating_sub(1),
            tavern_size: self.tavern_deck.len(),
            discard_size: self.discard_deck.len(),
            played_combos: self
                .played_combos
                .iter()
                .map(|combo| encode_cards(combo.iter().copied()))
                .collect(),
            status: self.status,
            turn: self.turn,
            hands,
        }
    }
}
