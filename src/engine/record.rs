//! Observable record of one completed turn.

use serde::{Deserialize, Serialize};

use crate::board::RedirectChain;
use crate::core::PlayerId;

/// What happened in one turn, for drivers to render or log.
///
/// A turn where `from == to` and `redirects` is empty is an overshoot:
/// the roll would have carried the token past the final square, so it
/// stayed put.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who moved.
    pub player: PlayerId,

    /// The die value rolled.
    pub roll: u8,

    /// Token position before the turn.
    pub from: u16,

    /// Token position after the turn (post-redirect).
    pub to: u16,

    /// Squares a snake or ladder fired from on the way to `to`, in
    /// order. Empty when the token landed on a plain square.
    pub redirects: RedirectChain,

    /// Whether this turn won the game for `player`.
    pub won: bool,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rolled a {} and moved from {} to {}",
            self.player, self.roll, self.from, self.to
        )?;
        if self.won {
            write!(f, " and wins the game")?;
        }
        Ok(())
    }
}
