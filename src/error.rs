//! Error taxonomy for board configuration and play.
//!
//! Two families:
//! - Configuration errors: raised when building a game, never during play.
//! - Play errors: sequencing mistakes (`GameAlreadyCompleted`) or queries
//!   for players the board doesn't know (`UnknownPlayer`).
//!
//! All errors are synchronous and non-retryable. There is no transient
//! failure class in this domain: no I/O, no network.

use thiserror::Error;

use crate::board::TransitionKind;
use crate::core::PlayerId;

/// All errors the engine can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Board size must be at least 1 square.
    #[error("board size must be at least 1")]
    InvalidBoardSize,

    /// A snake or ladder coordinate lies outside `[1, size]`.
    #[error("{kind} ({start}, {end}) is outside the board range [1, {size}]")]
    TransitionOutOfRange {
        kind: TransitionKind,
        start: u16,
        end: u16,
        size: u16,
    },

    /// A snake must move the token strictly backward, a ladder strictly
    /// forward.
    #[error("{kind} ({start}, {end}) does not strictly redirect the token")]
    NonRedirectingTransition {
        kind: TransitionKind,
        start: u16,
        end: u16,
    },

    /// Two transitions (snake or ladder) share a start square, which
    /// would make resolution order-dependent.
    #[error("more than one snake or ladder starts at square {start}")]
    DuplicateTransitionStart { start: u16 },

    /// Redirect resolution failed to reach a fixed point within the
    /// iteration cap. Happens when a snake and a ladder close a loop
    /// between them, which per-transition validation cannot rule out.
    #[error("snake/ladder transitions starting from square {position} form a loop")]
    RedirectLoop { position: u16 },

    /// A game needs at least one player.
    #[error("at least one player is required")]
    NoPlayers,

    /// `take_turn` was called after the game completed.
    #[error("the game is already completed")]
    GameAlreadyCompleted,

    /// Query for a player id with no token on the board.
    #[error("no token registered for {0}")]
    UnknownPlayer(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::TransitionOutOfRange {
            kind: TransitionKind::Snake,
            start: 120,
            end: 30,
            size: 100,
        };
        assert_eq!(
            format!("{}", err),
            "snake (120, 30) is outside the board range [1, 100]"
        );

        let err = GameError::NonRedirectingTransition {
            kind: TransitionKind::Ladder,
            start: 50,
            end: 10,
        };
        assert_eq!(
            format!("{}", err),
            "ladder (50, 10) does not strictly redirect the token"
        );

        let err = GameError::UnknownPlayer(PlayerId::new(3));
        assert_eq!(format!("{}", err), "no token registered for Player 3");
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(GameError::NoPlayers, GameError::NoPlayers);
        assert_ne!(
            GameError::GameAlreadyCompleted,
            GameError::DuplicateTransitionStart { start: 4 }
        );
    }
}
