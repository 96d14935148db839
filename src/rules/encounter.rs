//! Damage bookkeeping against the current enemy.
//!
//! Damage accumulates across every combo played since the enemy reached
//! the top of the castle. Spades lower the enemy's attack for the rest
//! of the encounter.

use crate::cards::{attack_power, spade_mitigation, Card, Combo};

/// The current enemy together with the combos played against it.
#[derive(Clone, Copy, Debug)]
pub struct Encounter<'a> {
    enemy: Card,
    combos: &'a [Combo],
}

impl<'a> Encounter<'a> {
    #[must_use]
    pub fn new(enemy: Card, combos: &'a [Combo]) -> Self {
        Self { enemy, combos }
    }

    #[must_use]
    pub fn enemy(&self) -> Card {
        self.enemy
    }

    /// Enemy health. Zero for a non-face card, which never appears in a
    /// castle built by the engine.
    #[must_use]
    pub fn health(&self) -> u32 {
        self.enemy.health().unwrap_or(0)
    }

    /// Enemy base attack.
    #[must_use]
    pub fn attack(&self) -> u32 {
        self.enemy.attack()
    }

    /// Total damage dealt, clubs doubling included.
    #[must_use]
    pub fn damage_dealt(&self) -> u32 {
        self.combos.iter().map(|combo| attack_power(combo, self.enemy)).sum()
    }

    #[must_use]
    pub fn health_left(&self) -> u32 {
        self.health().saturating_sub(self.damage_dealt())
    }

    /// Cumulative spade reduction.
    #[must_use]
    pub fn mitigation(&self) -> u32 {
        self.combos.iter().map(|combo| spade_mitigation(combo, self.enemy)).sum()
    }

    /// Residual attack the active player must absorb.
    #[must_use]
    pub fn attack_left(&self) -> u32 {
        self.attack().saturating_sub(self.mitigation())
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.damage_dealt() >= self.health()
    }

    /// Damage equals health exactly: the enemy joins the tavern.
    #[must_use]
    pub fn is_exact_kill(&self) -> bool {
        self.damage_dealt() == self.health()
    }
}
