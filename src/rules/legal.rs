//! Legal combo enumeration for the active player.

use rustc_hash::FxHashSet;

use crate::cards::{Card, Combo};

use super::game::Game;
use super::status::Status;
use super::validate::{validate_discard, validate_play};

impl Game {
    /// Every combo the active player may submit right now.
    ///
    /// Combos keep hand order; duplicates (possible only in hand-built
    /// states) are reported once. Empty when the game is not in progress.
    /// The empty combo is included in the play phase as the skip.
    ///
    /// Every subset of the hand is checked. Games only come from
    /// `create_with` and `from_wire_with`, which keep hands within
    /// `MAX_HAND_SIZE_LIMIT` cards.
    #[must_use]
    pub fn legal_combos(&self) -> Vec<Combo> {
        let Some(encounter) = self.encounter() else {
            return Vec::new();
        };
        let player = self.active_player();
        let hand = player.hand();
        let attack_left = encounter.attack_left();

        let mut seen = FxHashSet::default();
        let mut legal = Vec::new();
        for mask in 0u64..(1u64 << hand.len()) {
            let combo: Combo = hand
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, card)| *card)
                .collect();

            let ok = match self.status {
                Status::PlayingCards => validate_play(player, &combo).is_ok(),
                Status::DiscardingCards => validate_discard(player, &combo, attack_left).is_ok(),
                _ => return Vec::new(),
            };
            if ok && seen.insert(sorted(&combo)) {
                legal.push(combo);
            }
        }
        legal
    }
}

fn sorted(combo: &[Card]) -> Vec<Card> {
    let mut cards = combo.to_vec();
    cards.sort_unstable();
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::{Player, Seating};
    use crate::zones::Deck;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn solo(status: Status, hand: Vec<Card>) -> Game {
        let mut game = Game::create(&["p"]).unwrap();
        game.seating = Seating::new(vec![Player::new("p", 7).with_hand(hand)]).unwrap();
        game.enemy_deck = Deck::from_cards([card(Rank::Jack, Suit::Spades)]);
        game.status = status;
        game.turn = 1;
        game
    }

    #[test]
    fn test_play_phase_combos() {
        let game = solo(
            Status::PlayingCards,
            vec![
                card(Rank::Two, Suit::Clubs),
                card(Rank::Two, Suit::Hearts),
                card(Rank::Ace, Suit::Spades),
                card(Rank::Nine, Suit::Diamonds),
            ],
        );
        let legal = game.legal_combos();

        // skip, four singles, one pair, three ace pairings
        assert_eq!(legal.len(), 1 + 4 + 1 + 3);
        assert!(legal[0].is_empty());
        assert!(legal.iter().all(|combo| game.apply_combo("p", combo).is_ok()));
    }

    #[test]
    fn test_discard_phase_combos() {
        let game = solo(
            Status::DiscardingCards,
            vec![card(Rank::Ten, Suit::Clubs), card(Rank::Four, Suit::Hearts), card(Rank::Six, Suit::Hearts)],
        );
        let legal = game.legal_combos();

        // J attacks for 10: {10}, {10,4}, {10,6}, {4,6}, {10,4,6}
        assert_eq!(legal.len(), 5);
        assert!(legal.iter().all(|combo| !combo.is_empty()));
    }

    #[test]
    fn test_nothing_legal_outside_play() {
        assert!(Game::create(&["p"]).unwrap().legal_combos().is_empty());
        assert!(solo(Status::Lost, vec![card(Rank::Two, Suit::Clubs)]).legal_combos().is_empty());
    }
}
