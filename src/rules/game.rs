//! The game: piles, seating, played combos and status.
//!
//! ## Lifecycle
//!
//! 1. `Game::create` seats players (status `Created`, empty piles, turn 0)
//! 2. `start_new_game` builds the decks, shuffles seating once, deals hands
//! 3. `apply_turn` (see `rules::engine`) drives the game to `Won` or `Lost`
//!
//! Terminal games stay readable: callers may still serialize or view them.

use rustc_hash::FxHashSet;
use tracing::info;

use crate::cards::{Card, Combo};
use crate::core::{GameConfig, GameRng, Player, Result, Seating, TurnError};
use crate::zones::Deck;

use super::encounter::Encounter;
use super::status::Status;

/// A Regicide game.
///
/// Clones are cheap: piles are persistent vectors, so the turn processor
/// validates, clones and mutates the copy.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) seating: Seating,
    pub(crate) turn: u32,
    pub(crate) tavern_deck: Deck,
    pub(crate) enemy_deck: Deck,
    pub(crate) discard_deck: Deck,
    pub(crate) played_combos: Vec<Combo>,
    pub(crate) status: Status,
    pub(crate) rng: GameRng,
}

impl Game {
    /// Seat players with the default configuration.
    pub fn create<S: AsRef<str>>(player_ids: &[S]) -> Result<Self> {
        Self::create_with(player_ids, GameConfig::default())
    }

    /// Seat players with an explicit configuration.
    pub fn create_with<S: AsRef<str>>(player_ids: &[S], config: GameConfig) -> Result<Self> {
        if player_ids.is_empty() {
            return Err(TurnError::NoPlayers);
        }
        if player_ids.len() > config.max_players {
            return Err(TurnError::TooManyPlayers {
                count: player_ids.len(),
                max: config.max_players,
            });
        }
        config.validate_table(player_ids.len())?;

        let mut seen = FxHashSet::default();
        for id in player_ids {
            if !seen.insert(id.as_ref()) {
                return Err(TurnError::DuplicatePlayer(id.as_ref().to_string()));
            }
        }

        let players = player_ids
            .iter()
            .map(|id| Player::new(id.as_ref(), config.max_hand_size))
            .collect();

        Ok(Self {
            seating: Seating::new(players)?,
            turn: 0,
            tavern_deck: Deck::new(),
            enemy_deck: Deck::new(),
            discard_deck: Deck::new(),
            played_combos: Vec::new(),
            status: Status::Created,
            rng: config.rng(),
            config,
        })
    }

    /// Create and start a game in one step.
    pub fn start<S: AsRef<str>>(player_ids: &[S], config: GameConfig) -> Result<Self> {
        Self::create_with(player_ids, config)?.start_new_game()
    }

    /// Replace the RNG used for every later shuffle.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Deal a fresh game: the only transition out of `Created`.
    ///
    /// Builds the tavern and castle, shuffles seating once, deals
    /// `max_hand_size` cards to each player and hands the turn to the
    /// first seat.
    pub fn start_new_game(&self) -> Result<Self> {
        if self.status != Status::Created {
            return Err(TurnError::InvalidGameState { status: self.status });
        }

        let mut game = self.clone();
        game.tavern_deck = Deck::tavern(&mut game.rng);
        game.enemy_deck = Deck::castle(&mut game.rng);
        game.discard_deck.clear();
        game.played_combos.clear();
        game.seating.shuffle(&mut game.rng);

        let hand_size = game.config.max_hand_size;
        for player in game.seating.iter_mut() {
            let hand = game.tavern_deck.pop_many(hand_size)?;
            *player = Player::new(player.id.clone(), hand_size).with_hand(hand);
            player.sort_hand();
        }

        game.status = Status::PlayingCards;
        game.turn = 1;

        info!(
            players = game.seating.len(),
            first = %game.seating.active().id,
            "regicide game started"
        );
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Turn counter: 0 before the deal, then +1 per accepted action.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Players in fixed seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.seating.players()
    }

    #[must_use]
    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        self.seating.active()
    }

    #[must_use]
    pub fn find_player(&self, id: &str) -> Option<&Player> {
        self.seating.find(id)
    }

    #[must_use]
    pub fn tavern_deck(&self) -> &Deck {
        &self.tavern_deck
    }

    /// The castle; its top card is the current enemy.
    #[must_use]
    pub fn enemy_deck(&self) -> &Deck {
        &self.enemy_deck
    }

    #[must_use]
    pub fn discard_deck(&self) -> &Deck {
        &self.discard_deck
    }

    /// Combos played against the current enemy.
    #[must_use]
    pub fn played_combos(&self) -> &[Combo] {
        &self.played_combos
    }

    #[must_use]
    pub fn current_enemy(&self) -> Option<Card> {
        self.enemy_deck.peek()
    }

    /// Damage bookkeeping for the current enemy, if any.
    #[must_use]
    pub fn encounter(&self) -> Option<Encounter<'_>> {
        self.current_enemy()
            .map(|enemy| Encounter::new(enemy, &self.played_combos))
    }

    /// Cards across every pile, hand and played combo.
    ///
    /// 52 for any game dealt by `start_new_game`.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.tavern_deck.len()
            + self.discard_deck.len()
            + self.enemy_deck.len()
            + self.seating.iter().map(Player::hand_size).sum::<usize>()
            + self.played_combos.iter().map(|combo| combo.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_game() {
        let game = Game::create(&["user1"]).unwrap();

        assert_eq!(game.players().len(), 1);
        assert_eq!(game.active_player().id.as_str(), "user1");
        assert_eq!(game.turn(), 0);
        assert_eq!(game.status(), Status::Created);
        assert!(game.tavern_deck().is_empty());
        assert!(game.enemy_deck().is_empty());
        assert!(game.discard_deck().is_empty());
        assert!(game.played_combos().is_empty());
        assert!(game.current_enemy().is_none());
        assert_eq!(game.total_cards(), 0);
    }

    #[test]
    fn test_create_rejects_bad_tables() {
        let none: [&str; 0] = [];
        assert_eq!(Game::create(&none).unwrap_err(), TurnError::NoPlayers);
        assert_eq!(
            Game::create(&["a", "b", "c", "d", "e"]).unwrap_err(),
            TurnError::TooManyPlayers { count: 5, max: 4 }
        );
        assert_eq!(
            Game::create(&["a", "b", "a"]).unwrap_err(),
            TurnError::DuplicatePlayer("a".to_string())
        );
    }

    #[test]
    fn test_create_rejects_undealable_config() {
        let config = GameConfig::default().with_max_hand_size(12);
        assert!(Game::create_with(&["a", "b", "c"], config.clone()).is_ok());

        let err = Game::create_with(&["a", "b", "c", "d"], config).unwrap_err();
        assert!(matches!(err, TurnError::InvalidConfig(_)));
        assert!(!err.is_internal());

        assert!(matches!(
            Game::create_with(&["a"], GameConfig::default().with_max_hand_size(0)),
            Err(TurnError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_start_new_game() {
        let config = GameConfig::default().with_seed(42);
        let game = Game::start(&["user1", "user2"], config).unwrap();

        assert_eq!(game.status(), Status::PlayingCards);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.players().len(), 2);
        assert!(game.find_player(game.active_player().id.as_str()).is_some());
        assert_eq!(game.enemy_deck().len(), 12);
        assert_eq!(game.tavern_deck().len(), 40 - 2 * 7);
        assert!(game.discard_deck().is_empty());
        assert!(game.played_combos().is_empty());
        assert!(game.players().iter().all(|p| p.hand_size() == 7));
        assert_eq!(game.total_cards(), 52);
        assert_eq!(game.current_enemy().map(|c| c.rank), Some(crate::cards::Rank::Jack));
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let game = Game::start(&["user1"], GameConfig::default().with_seed(1)).unwrap();
        assert_eq!(
            game.start_new_game().unwrap_err(),
            TurnError::InvalidGameState { status: Status::PlayingCards }
        );
    }

    #[test]
    fn test_seeded_deal_is_reproducible() {
        let config = GameConfig::default().with_seed(99);
        let a = Game::start(&["a", "b", "c"], config.clone()).unwrap();
        let b = Game::start(&["a", "b", "c"], config).unwrap();

        assert_eq!(a.players(), b.players());
        assert_eq!(a.tavern_deck(), b.tavern_deck());
        assert_eq!(a.enemy_deck(), b.enemy_deck());
    }
}
