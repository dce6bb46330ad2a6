//! Snake and ladder transitions.
//!
//! A transition maps one square (its start) to another (its end).
//! Landing on the start square moves the token to the end square:
//! backward for a snake, forward for a ladder. Both must strictly
//! redirect; a transition that leaves the token in place is rejected.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Which kind of transition a square hosts. Used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Snake,
    Ladder,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Snake => write!(f, "snake"),
            TransitionKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// A snake: landing on `start` sends the token back to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snake {
    /// The head square the token lands on.
    pub start: u16,
    /// The tail square the token slides down to.
    pub end: u16,
}

impl Snake {
    /// Create a new snake. Validated against the board in
    /// [`Board::new`](crate::board::Board::new).
    #[must_use]
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Check coordinates against a board of the given size.
    ///
    /// Requires `0 < end < start <= size`.
    pub fn validate(&self, size: u16) -> Result<(), GameError> {
        if self.start == 0 || self.end == 0 || self.start > size || self.end > size {
            return Err(GameError::TransitionOutOfRange {
                kind: TransitionKind::Snake,
                start: self.start,
                end: self.end,
                size,
            });
        }
        if self.start <= self.end {
            return Err(GameError::NonRedirectingTransition {
                kind: TransitionKind::Snake,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// A ladder: landing on `start` carries the token up to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ladder {
    /// The foot square the token lands on.
    pub start: u16,
    /// The top square the token climbs to.
    pub end: u16,
}

impl Ladder {
    /// Create a new ladder. Validated against the board in
    /// [`Board::new`](crate::board::Board::new).
    #[must_use]
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Check coordinates against a board of the given size.
    ///
    /// Requires `0 < start < end <= size`.
    pub fn validate(&self, size: u16) -> Result<(), GameError> {
        if self.start == 0 || self.end == 0 || self.start > size || self.end > size {
            return Err(GameError::TransitionOutOfRange {
                kind: TransitionKind::Ladder,
                start: self.start,
                end: self.end,
                size,
            });
        }
        if self.start >= self.end {
            return Err(GameError::NonRedirectingTransition {
                kind: TransitionKind::Ladder,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}
