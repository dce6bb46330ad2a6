//! Board geometry, snake/ladder transitions, and token positions.
//!
//! The board is configured once, validated up front, and structurally
//! immutable for the life of a game. Only token positions change, and
//! only through the game engine.

pub mod board;
pub mod transition;

pub use board::{Board, RedirectChain, DEFAULT_BOARD_SIZE};
pub use transition::{Ladder, Snake, TransitionKind};
