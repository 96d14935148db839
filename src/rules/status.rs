//! Game status: the turn state machine's states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::TurnError;

/// Current status of a game.
///
/// `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Players seated, nothing dealt.
    Created,
    /// Active player must play a combo (or skip).
    PlayingCards,
    /// Active player must discard enough to absorb the enemy's attack.
    DiscardingCards,
    /// Castle emptied.
    Won,
    /// A player could not absorb an enemy attack.
    Lost,
}

impl Status {
    /// Wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Created => "created",
            Status::PlayingCards => "playing_cards",
            Status::DiscardingCards => "discarding_cards",
            Status::Won => "won",
            Status::Lost => "lost",
        }
    }

    /// True for `Won` and `Lost`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }

    /// True while turns are accepted.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Status::PlayingCards | Status::DiscardingCards)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Status::Created),
            "playing_cards" => Ok(Status::PlayingCards),
            "discarding_cards" => Ok(Status::DiscardingCards),
            "won" => Ok(Status::Won),
            "lost" => Ok(Status::Lost),
            other => Err(TurnError::InvalidWireState(format!("unknown status {other:?}"))),
        }
    }
}
