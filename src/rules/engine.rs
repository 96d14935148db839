//! Turn processing.
//!
//! `apply_combo` is a pure transition: it validates against `self`, then
//! clones and mutates the copy. A rejected turn never touches the game.
//!
//! ## Suit powers (played combos only, never discards)
//!
//! Each fires once per combo if the combo holds that suit and the enemy
//! is not of it:
//! - Clubs: double damage (folded into `attack_power`)
//! - Hearts: shuffle discard, move up to `combo_damage` cards to the
//!   bottom of the tavern
//! - Diamonds: draw up to `combo_damage` cards round-robin from the
//!   acting player, skipping full hands
//! - Spades: lower the enemy's attack for the encounter (folded into
//!   `spade_mitigation`)

use tracing::{debug, info};

use crate::cards::{combo_damage, triggers_power, Card, Combo, Suit};
use crate::core::{Result, TurnError};
use crate::wire::codec::decode_combo;

use super::game::Game;
use super::status::Status;
use super::validate::{validate_actor, validate_turn};

impl Game {
    /// Apply a turn given as wire `(rank_code, suit_glyph)` pairs.
    ///
    /// Status and turn order are checked before the cards are decoded;
    /// undecodable cards then fail with `MalformedTurnPayload`.
    pub fn apply_turn<R, S>(&self, player_id: &str, combo: &[(R, S)]) -> Result<Game>
    where
        R: AsRef<str>,
        S: AsRef<str>,
    {
        let combo = validate_actor(self, player_id).and_then(|_| decode_combo(combo));
        match combo {
            Ok(combo) => self.apply_combo(player_id, &combo),
            Err(err) => {
                debug!(player = player_id, turn = self.turn, error = %err, "turn rejected");
                Err(err)
            }
        }
    }

    /// Apply a turn: play during `PlayingCards`, discard during
    /// `DiscardingCards`.
    pub fn apply_combo(&self, player_id: &str, combo: &[Card]) -> Result<Game> {
        if let Err(err) = validate_turn(self, player_id, combo) {
            debug!(player = player_id, turn = self.turn, error = %err, "turn rejected");
            return Err(err);
        }

        let mut next = self.clone();
        match next.status {
            Status::PlayingCards => next.play_cards(combo)?,
            Status::DiscardingCards => next.discard_cards(combo)?,
            status => return Err(TurnError::InvalidGameState { status }),
        }

        debug!(
            player = player_id,
            turn = next.turn,
            cards = combo.len(),
            status = %next.status,
            "turn applied"
        );
        Ok(next)
    }

    fn play_cards(&mut self, combo: &[Card]) -> Result<()> {
        let enemy = self
            .current_enemy()
            .ok_or(TurnError::InvalidGameState { status: self.status })?;
        let actor = self.seating.active_index();

        self.seating.active_mut().remove_cards(combo)?;

        if !combo.is_empty() {
            self.activate_powers(actor, enemy, combo)?;
            self.played_combos.push(Combo::from_slice(combo));
        }

        let (defeated, attack_left) = match self.encounter() {
            Some(encounter) => (encounter.is_defeated(), encounter.attack_left()),
            None => return Err(TurnError::EmptyDeck),
        };

        if defeated {
            self.status = Status::PlayingCards;
            self.pull_next_enemy()?;
            if self.enemy_deck.is_empty() {
                self.status = Status::Won;
                info!(turn = self.turn + 1, "castle defeated, game won");
            }
        } else if attack_left == 0 {
            self.status = Status::PlayingCards;
            self.seating.advance();
        } else if self.seating.active().hand_damage() < attack_left {
            self.status = Status::Lost;
            info!(
                player = %self.seating.active().id,
                attack_left,
                enemy = %enemy,
                "enemy attack cannot be absorbed, game lost"
            );
        } else {
            self.status = Status::DiscardingCards;
        }

        self.turn += 1;
        Ok(())
    }

    fn discard_cards(&mut self, combo: &[Card]) -> Result<()> {
        self.seating.active_mut().remove_cards(combo)?;
        self.discard_deck.extend_bottom(combo.iter().copied());
        self.status = Status::PlayingCards;
        self.seating.advance();
        self.turn += 1;
        Ok(())
    }

    /// Hearts then diamonds, so a heal can feed the same combo's draw.
    fn activate_powers(&mut self, actor: usize, enemy: Card, combo: &[Card]) -> Result<()> {
        let damage = combo_damage(combo) as usize;

        if triggers_power(combo, enemy, Suit::Hearts) {
            self.discard_deck.shuffle(&mut self.rng);
            let count = damage.min(self.discard_deck.len());
            let healed = self.discard_deck.pop_many(count)?;
            self.tavern_deck.extend_bottom(healed);
            debug!(count, "hearts: discard returned to tavern");
        }

        if triggers_power(combo, enemy, Suit::Diamonds) {
            let count = damage
                .min(self.seating.total_capacity())
                .min(self.tavern_deck.len());
            let drawn = self.tavern_deck.pop_many(count)?;
            let surplus = self.seating.deal_round_robin(actor, drawn);
            // Capacity bounds the draw, so nothing comes back; keep the cards anyway.
            for card in surplus.into_iter().rev() {
                self.tavern_deck.push_top(card);
            }
            debug!(count, "diamonds: cards drawn");
        }

        Ok(())
    }

    /// Retire the defeated enemy and flush played combos to discard.
    fn pull_next_enemy(&mut self) -> Result<()> {
        let exact = self
            .encounter()
            .map(|encounter| encounter.is_exact_kill())
            .unwrap_or(false);
        let enemy = self.enemy_deck.pop()?;

        if exact {
            self.tavern_deck.push_top(enemy);
        } else {
            self.discard_deck.push_bottom(enemy);
        }
        for combo in self.played_combos.drain(..) {
            self.discard_deck.extend_bottom(combo);
        }

        info!(
            enemy = %enemy,
            exact,
            remaining = self.enemy_deck.len(),
            "enemy defeated"
        );
        Ok(())
    }
}
