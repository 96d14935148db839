//! Rooms and turn storage around the engine.

pub mod room;
pub mod store;

pub use room::Room;
pub use store::{MemoryTurnStore, TurnStore};
