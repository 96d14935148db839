//! The serialization boundary.
//!
//! - `codec`: `Card` <-> `(rank_code, suit_glyph)`
//! - `state`: `WireState`, the fully revealed persisted form
//! - `payload`: client turn payloads
//! - `view`: per-player redacted views

pub mod codec;
pub mod payload;
pub mod state;
pub mod view;

pub use codec::{decode_card, decode_combo, encode_card, encode_cards, parse_card, WireCard};
pub use payload::TurnPayload;
pub use state::WireState;
pub use view::{EnemyView, HandView, PlayerView};
