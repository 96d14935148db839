//! Combo legality. Every check here runs before any mutation.
//!
//! Play phase:
//! - every card must be held
//! - empty combo = skip, single card always legal
//! - a combo with an ace is exactly the ace plus one non-ace card
//! - otherwise all cards share a rank in 2..=5 and total at most 10
//!
//! Discard phase:
//! - every card must be held
//! - total attack must cover the enemy's residual attack

use crate::cards::{combo_damage, Card, Rank};
use crate::core::{Player, Result, TurnError};

use super::game::Game;
use super::status::Status;

/// Largest total attack a same-rank set may have.
pub const MAX_SET_DAMAGE: u32 = 10;

/// Structural play-phase rules (ownership checked separately).
pub fn validate_combo_shape(combo: &[Card]) -> Result<()> {
    if combo.len() <= 1 {
        return Ok(());
    }

    let aces = combo.iter().filter(|card| card.is_ace()).count();
    if aces > 0 {
        if combo.len() != 2 || aces != 1 {
            return Err(TurnError::MaxComboSizeExceeded);
        }
        return Ok(());
    }

    let rank = combo[0].rank;
    if !rank.is_pairable()
        || combo.iter().any(|card| card.rank != rank)
        || combo_damage(combo) > MAX_SET_DAMAGE
    {
        return Err(TurnError::InvalidPairCombo);
    }
    Ok(())
}

/// True if `combo` is a legal same-rank set (two or more cards, no ace).
#[must_use]
pub fn is_valid_set(combo: &[Card]) -> bool {
    combo.len() >= 2
        && !combo.iter().any(|card| card.rank == Rank::Ace)
        && validate_combo_shape(combo).is_ok()
}

/// Play-phase validation for `player`.
pub fn validate_play(player: &Player, combo: &[Card]) -> Result<()> {
    player.check_holds(combo)?;
    validate_combo_shape(combo)
}

/// Discard-phase validation for `player` against `attack_left`.
pub fn validate_discard(player: &Player, combo: &[Card], attack_left: u32) -> Result<()> {
    player.check_holds(combo)?;
    let provided = combo_damage(combo);
    if provided < attack_left {
        return Err(TurnError::InsufficientDiscardPower {
            required: attack_left,
            provided,
        });
    }
    Ok(())
}

/// Game in progress and `player_id` to move. Needs no cards.
pub fn validate_actor<'g>(game: &'g Game, player_id: &str) -> Result<&'g Player> {
    let status = game.status();
    if !status.is_in_progress() {
        return Err(TurnError::InvalidGameState { status });
    }

    let active = game.active_player();
    if active.id.as_str() != player_id {
        return Err(TurnError::TurnOrderViolation {
            expected: active.id.to_string(),
            actual: player_id.to_string(),
        });
    }
    Ok(active)
}

/// Full turn validation: status, turn order, then the phase's combo rules.
pub fn validate_turn(game: &Game, player_id: &str, combo: &[Card]) -> Result<()> {
    let active = validate_actor(game, player_id)?;
    let status = game.status();

    let encounter = game
        .encounter()
        .ok_or(TurnError::InvalidGameState { status })?;

    match status {
        Status::PlayingCards => validate_play(active, combo),
        Status::DiscardingCards => validate_discard(active, combo, encounter.attack_left()),
        _ => Err(TurnError::InvalidGameState { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_singles_and_skip() {
        assert!(validate_combo_shape(&[]).is_ok());
        assert!(validate_combo_shape(&[card(Rank::Ten, Suit::Spades)]).is_ok());
        assert!(validate_combo_shape(&[card(Rank::Ace, Suit::Spades)]).is_ok());
    }

    #[test]
    fn test_ace_pairing() {
        let ace = card(Rank::Ace, Suit::Diamonds);
        assert!(validate_combo_shape(&[card(Rank::Five, Suit::Clubs), ace]).is_ok());
        assert!(validate_combo_shape(&[ace, card(Rank::Ten, Suit::Hearts)]).is_ok());

        assert_eq!(
            validate_combo_shape(&[card(Rank::Ten, Suit::Spades), card(Rank::Jack, Suit::Diamonds), ace]),
            Err(TurnError::MaxComboSizeExceeded)
        );
        assert_eq!(
            validate_combo_shape(&[ace, card(Rank::Ace, Suit::Clubs)]),
            Err(TurnError::MaxComboSizeExceeded)
        );
    }

    #[test]
    fn test_sets() {
        let twos = [
            card(Rank::Two, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Two, Suit::Spades),
        ];
        assert!(validate_combo_shape(&twos).is_ok());
        assert!(is_valid_set(&twos));

        let fives = [card(Rank::Five, Suit::Clubs), card(Rank::Five, Suit::Hearts)];
        assert!(validate_combo_shape(&fives).is_ok());
    }

    #[test]
    fn test_invalid_sets() {
        let cases: [&[Card]; 4] = [
            &[card(Rank::Ten, Suit::Spades), card(Rank::Jack, Suit::Diamonds)],
            &[card(Rank::Six, Suit::Diamonds), card(Rank::Six, Suit::Clubs)],
            &[card(Rank::Five, Suit::Clubs), card(Rank::Five, Suit::Diamonds), card(Rank::Five, Suit::Spades)],
            &[card(Rank::Three, Suit::Clubs), card(Rank::Four, Suit::Clubs)],
        ];
        for combo in cases {
            assert_eq!(validate_combo_shape(combo), Err(TurnError::InvalidPairCombo), "{combo:?}");
            assert!(!is_valid_set(combo));
        }
    }

    #[test]
    fn test_validate_play_checks_hand_first() {
        let player = Player::new("p", 7).with_hand([card(Rank::Ace, Suit::Diamonds)]);
        assert_eq!(
            validate_play(&player, &[card(Rank::Ace, Suit::Diamonds), card(Rank::Two, Suit::Diamonds)]),
            Err(TurnError::CardNotInHand(card(Rank::Two, Suit::Diamonds)))
        );
    }

    #[test]
    fn test_validate_discard() {
        let player = Player::new("p", 7)
            .with_hand([card(Rank::Ten, Suit::Spades), card(Rank::King, Suit::Diamonds)]);

        assert!(validate_discard(&player, &[card(Rank::King, Suit::Diamonds)], 11).is_ok());
        assert!(validate_discard(&player, &[card(Rank::Ten, Suit::Spades)], 10).is_ok());
        assert_eq!(
            validate_discard(&player, &[card(Rank::Ten, Suit::Spades)], 11),
            Err(TurnError::InsufficientDiscardPower { required: 11, provided: 10 })
        );
        assert_eq!(
            validate_discard(&player, &[], 1),
            Err(TurnError::InsufficientDiscardPower { required: 1, provided: 0 })
        );
    }
}
