//! Turn storage.
//!
//! A store keeps one `WireState` per `(room, turn)`. Rooms load the row
//! with the highest turn before applying the next action.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::core::Result;
use crate::wire::WireState;

/// Persistence seam for rooms.
pub trait TurnStore {
    /// Record the state reached at `turn`.
    fn save(&mut self, room: &str, turn: u32, state: WireState) -> Result<()>;

    /// State with the highest turn number, if the room has any.
    fn latest(&self, room: &str) -> Result<Option<WireState>>;
}

/// In-memory store keeping every turn of every room.
#[derive(Clone, Debug, Default)]
pub struct MemoryTurnStore {
    rooms: FxHashMap<String, BTreeMap<u32, WireState>>,
}

impl MemoryTurnStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored turns for `room`.
    #[must_use]
    pub fn turn_count(&self, room: &str) -> usize {
        self.rooms.get(room).map_or(0, BTreeMap::len)
    }

    /// Stored state for a specific turn.
    #[must_use]
    pub fn get(&self, room: &str, turn: u32) -> Option<&WireState> {
        self.rooms.get(room)?.get(&turn)
    }

    /// Stored turn numbers, ascending.
    pub fn turns(&self, room: &str) -> impl Iterator<Item = u32> + '_ {
        self.rooms.get(room).into_iter().flat_map(|turns| turns.keys().copied())
    }
}

impl TurnStore for MemoryTurnStore {
    fn save(&mut self, room: &str, turn: u32, state: WireState) -> Result<()> {
        self.rooms.entry(room.to_string()).or_default().insert(turn, state);
        Ok(())
    }

    fn latest(&self, room: &str) -> Result<Option<WireState>> {
        Ok(self
            .rooms
            .get(room)
            .and_then(|turns| turns.values().next_back())
            .cloned())
    }
}
