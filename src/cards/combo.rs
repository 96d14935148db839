//! Combo arithmetic: damage, clubs doubling and spades mitigation.
//!
//! A combo is one or more cards played in a single action. Suit powers
//! only fire when the enemy is not of the same suit (immunity).

use smallvec::SmallVec;

use super::card::{Card, Suit};

/// Cards played together. Legal combos hold at most four cards,
/// so they live inline without heap allocation.
pub type Combo = SmallVec<[Card; 4]>;

/// Sum of attack values, without any suit power.
#[must_use]
pub fn combo_damage(combo: &[Card]) -> u32 {
    combo.iter().map(|card| card.attack()).sum()
}

/// True if any card in the combo has the given suit.
#[must_use]
pub fn contains_suit(combo: &[Card], suit: Suit) -> bool {
    combo.iter().any(|card| card.suit == suit)
}

/// True if the combo triggers `suit`'s power against `enemy`.
#[must_use]
pub fn triggers_power(combo: &[Card], enemy: Card, suit: Suit) -> bool {
    enemy.suit != suit && contains_suit(combo, suit)
}

/// Damage the combo deals to `enemy`, doubled by clubs unless the enemy
/// is a club.
#[must_use]
pub fn attack_power(combo: &[Card], enemy: Card) -> u32 {
    let damage = combo_damage(combo);
    if triggers_power(combo, enemy, Suit::Clubs) {
        damage * 2
    } else {
        damage
    }
}

/// Reduction of the enemy's attack granted by spades in the combo.
#[must_use]
pub fn spade_mitigation(combo: &[Card], enemy: Card) -> u32 {
    if triggers_power(combo, enemy, Suit::Spades) {
        combo_damage(combo)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_combo_damage() {
        assert_eq!(combo_damage(&[]), 0);
        assert_eq!(
            combo_damage(&[card(Rank::Five, Suit::Clubs), card(Rank::Ace, Suit::Diamonds)]),
            6
        );
    }

    #[test]
    fn test_clubs_double_damage() {
        let jack_hearts = card(Rank::Jack, Suit::Hearts);
        let combo = [card(Rank::Four, Suit::Clubs), card(Rank::Four, Suit::Hearts)];
        assert_eq!(attack_power(&combo, jack_hearts), 16);

        let no_clubs = [card(Rank::Nine, Suit::Spades)];
        assert_eq!(attack_power(&no_clubs, jack_hearts), 9);
    }

    #[test]
    fn test_clubs_enemy_is_immune() {
        let jack_clubs = card(Rank::Jack, Suit::Clubs);
        assert_eq!(attack_power(&[card(Rank::Ten, Suit::Clubs)], jack_clubs), 10);
    }

    #[test]
    fn test_spade_mitigation() {
        let queen_hearts = card(Rank::Queen, Suit::Hearts);
        let combo = [card(Rank::Three, Suit::Spades), card(Rank::Three, Suit::Diamonds)];
        assert_eq!(spade_mitigation(&combo, queen_hearts), 6);
        assert_eq!(spade_mitigation(&[card(Rank::Six, Suit::Hearts)], queen_hearts), 0);

        let queen_spades = card(Rank::Queen, Suit::Spades);
        assert_eq!(spade_mitigation(&combo, queen_spades), 0);
    }

    #[test]
    fn test_triggers_power() {
        let enemy = card(Rank::King, Suit::Diamonds);
        let combo = [card(Rank::Two, Suit::Diamonds), card(Rank::Two, Suit::Hearts)];
        assert!(!triggers_power(&combo, enemy, Suit::Diamonds));
        assert!(triggers_power(&combo, enemy, Suit::Hearts));
        assert!(!triggers_power(&combo, enemy, Suit::Clubs));
    }
}
