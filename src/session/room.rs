//! A room drives one game through a `TurnStore`.
//!
//! Every call reloads the latest stored state, so a room holds no game
//! of its own. Callers serving many rooms concurrently must serialize
//! `update` calls per room.

use serde_json::Value;
use tracing::{debug, info};

use crate::core::{GameConfig, GameRng, Result, TurnError};
use crate::rules::{Game, Status};
use crate::wire::PlayerView;

use super::store::TurnStore;

/// A game room backed by `S`.
#[derive(Debug)]
pub struct Room<S> {
    id: String,
    store: S,
    config: GameConfig,
    rng: GameRng,
}

impl<S: TurnStore> Room<S> {
    pub fn new(id: impl Into<String>, store: S, config: GameConfig) -> Self {
        Self {
            id: id.into(),
            store,
            rng: config.rng(),
            config,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Deal a new game and store it as the first turn.
    ///
    /// A room holds one game; setting up a room with stored turns fails
    /// with `RoomAlreadySetUp` and leaves the store untouched.
    pub fn setup<P: AsRef<str>>(&mut self, player_ids: &[P]) -> Result<Status> {
        if self.store.latest(&self.id)?.is_some() {
            return Err(TurnError::RoomAlreadySetUp(self.id.clone()));
        }
        let game = Game::create_with(player_ids, self.config.clone())?
            .with_rng(self.rng.for_context(&format!("{}:setup", self.id)))
            .start_new_game()?;
        self.store.save(&self.id, game.turn(), game.to_wire())?;

        info!(room = %self.id, players = player_ids.len(), "room set up");
        Ok(game.status())
    }

    /// Load the latest stored game.
    pub fn load(&self) -> Result<Game> {
        let wire = self
            .store
            .latest(&self.id)?
            .ok_or_else(|| TurnError::GameNotFound(self.id.clone()))?;
        let rng = self.rng.for_turn(&self.id, wire.turn);
        Ok(Game::from_wire_with(&wire, self.config.clone())?.with_rng(rng))
    }

    /// Apply a client payload and store the resulting state.
    ///
    /// Rejected turns store nothing.
    pub fn update(&mut self, player_id: &str, payload: Option<&Value>) -> Result<Status> {
        let game = self.load()?;
        let next = match game.apply_payload(player_id, payload) {
            Ok(next) => next,
            Err(err) => {
                debug!(room = %self.id, player = player_id, code = err.code(), "turn rejected");
                return Err(err);
            }
        };
        self.store.save(&self.id, next.turn(), next.to_wire())?;

        if next.status().is_terminal() {
            info!(room = %self.id, status = %next.status(), turn = next.turn(), "room finished");
        }
        Ok(next.status())
    }

    /// The latest state as seen by `viewer`.
    pub fn poll(&self, viewer: Option<&str>) -> Result<PlayerView> {
        Ok(self.load()?.to_player_view(viewer))
    }
}
