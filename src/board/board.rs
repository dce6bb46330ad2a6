//! Board geometry and token positions.
//!
//! The board owns:
//! - The square count (`size`). Squares are numbered 1 to `size`;
//!   position 0 means the token has not entered the board yet.
//! - The snake and ladder transitions, validated at construction and
//!   immutable afterward.
//! - One token position per registered player, mutated only by the
//!   game engine's move step.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::transition::{Ladder, Snake};
use crate::core::PlayerId;
use crate::error::GameError;

/// Squares a token passed through while redirecting, in order.
///
/// SmallVec optimizes for 0-2 hops (the common case) without heap
/// allocation.
pub type RedirectChain = SmallVec<[u16; 4]>;

/// Default number of squares on a board.
pub const DEFAULT_BOARD_SIZE: u16 = 100;

/// Board state: geometry plus token positions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    size: u16,
    snakes: Vec<Snake>,
    ladders: Vec<Ladder>,
    tokens: FxHashMap<PlayerId, u16>,
}

impl Board {
    /// Create a board, validating its geometry.
    ///
    /// ## Errors
    ///
    /// - [`GameError::InvalidBoardSize`] if `size` is 0.
    /// - [`GameError::TransitionOutOfRange`] if any coordinate is
    ///   outside `[1, size]`.
    /// - [`GameError::NonRedirectingTransition`] if a snake does not
    ///   descend or a ladder does not climb.
    /// - [`GameError::DuplicateTransitionStart`] if two transitions
    ///   (across the combined snake and ladder set) share a start
    ///   square. With unique starts, resolution never depends on scan
    ///   order and redirect chains cannot revisit a square without
    ///   forming a detectable cycle.
    pub fn new(size: u16, snakes: Vec<Snake>, ladders: Vec<Ladder>) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize);
        }

        let mut starts = FxHashSet::default();
        for snake in &snakes {
            snake.validate(size)?;
            if !starts.insert(snake.start) {
                return Err(GameError::DuplicateTransitionStart { start: snake.start });
            }
        }
        for ladder in &ladders {
            ladder.validate(size)?;
            if !starts.insert(ladder.start) {
                return Err(GameError::DuplicateTransitionStart {
                    start: ladder.start,
                });
            }
        }

        Ok(Self {
            size,
            snakes,
            ladders,
            tokens: FxHashMap::default(),
        })
    }

    /// Number of squares. The final (winning) square equals this value.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// The snakes on this board.
    #[must_use]
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    /// The ladders on this board.
    #[must_use]
    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    /// Place every given player's token at position 0 (off the board).
    pub fn register_players<I: IntoIterator<Item = PlayerId>>(&mut self, players: I) {
        self.tokens = players.into_iter().map(|p| (p, 0)).collect();
    }

    /// Current token position for a player.
    ///
    /// ## Errors
    ///
    /// [`GameError::UnknownPlayer`] if the player was never registered
    /// or has already won (winners' tokens leave the board).
    pub fn token_position(&self, player: PlayerId) -> Result<u16, GameError> {
        self.tokens
            .get(&player)
            .copied()
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Number of tokens still on the board.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn set_token(&mut self, player: PlayerId, position: u16) {
        self.tokens.insert(player, position);
    }

    pub(crate) fn remove_token(&mut self, player: PlayerId) {
        self.tokens.remove(&player);
    }

    /// Follow snakes and ladders from a raw landing square to the final
    /// resting square.
    ///
    /// Each iteration applies at most one transition at the current
    /// candidate square, scanning snakes before ladders (the tie-break
    /// inherited from the classic rules; unreachable on a validated
    /// board since starts are unique). Loops until no transition starts
    /// at the candidate.
    ///
    /// Returns the resting square and the chain of squares a transition
    /// fired from, in order. The result is a fixed point: resolving the
    /// resting square again returns it unchanged.
    ///
    /// ## Errors
    ///
    /// [`GameError::RedirectLoop`] if no fixed point is reached within
    /// `snakes + ladders` applications. An acyclic chain fires each
    /// transition at most once, so exceeding the cap proves a cycle.
    /// Direction checks keep same-kind chains acyclic, but a snake and
    /// a ladder can still close a loop between them; the cap turns that
    /// configuration into an error instead of a hang.
    pub fn resolve_redirect(&self, position: u16) -> Result<(u16, RedirectChain), GameError> {
        let cap = self.snakes.len() + self.ladders.len();
        let mut current = position;
        let mut chain = RedirectChain::new();

        while let Some(next) = self.transition_from(current) {
            if chain.len() == cap {
                return Err(GameError::RedirectLoop { position });
            }
            chain.push(current);
            current = next;
        }

        Ok((current, chain))
    }

    /// The square a transition starting at `square` leads to, if any.
    /// Snakes are checked before ladders.
    fn transition_from(&self, square: u16) -> Option<u16> {
        self.snakes
            .iter()
            .find(|s| s.start == square)
            .map(|s| s.end)
            .or_else(|| {
                self.ladders
                    .iter()
                    .find(|l| l.start == square)
                    .map(|l| l.end)
            })
    }
}
