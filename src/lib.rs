//! # snakes-ladders
//!
//! A snake-and-ladder game-state engine with deterministic dice.
//!
//! ## Design Principles
//!
//! 1. **No hidden globals**: The engine is a plain value constructed
//!    with injected dependencies (die, board geometry) and owned by
//!    whoever drives it.
//!
//! 2. **Presentation-agnostic**: Drivers call [`GameEngine::take_turn`]
//!    and read snapshots; the core knows nothing about windows, dialogs,
//!    or event loops.
//!
//! 3. **Deterministic by choice**: Seed the die for replayable games,
//!    or script it exactly in tests.
//!
//! ## Rules
//!
//! Tokens start off the board at position 0 and advance by die roll.
//! Landing on a snake's head slides the token down; landing on a
//! ladder's foot carries it up; redirects chain until the token rests
//! on a plain square. A roll that would pass the final square moves
//! nothing (exact landing only). Resting exactly on the final square
//! wins, and the winner leaves the rotation permanently.
//!
//! ## Modules
//!
//! - `core`: Player identity, dice
//! - `board`: Board geometry, snake/ladder transitions, token positions
//! - `engine`: Turn orchestration, completion rules, turn records
//! - `error`: Typed error taxonomy
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{CompletionRule, GameBuilder};
//!
//! let mut game = GameBuilder::new()
//!     .snake(97, 78)
//!     .snake(62, 19)
//!     .ladder(1, 38)
//!     .ladder(33, 84)
//!     .players(["Ada", "Grace", "Edsger"])
//!     .completion_rule(CompletionRule::LastPlayer)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! while !game.is_completed() {
//!     let record = game.take_turn().unwrap();
//!     println!("{}", record);
//! }
//!
//! for (place, winner) in game.winners().iter().enumerate() {
//!     println!("{}. {}", place + 1, winner.name());
//! }
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::board::{Board, Ladder, RedirectChain, Snake, TransitionKind, DEFAULT_BOARD_SIZE};
pub use crate::core::{Die, Player, PlayerId, ScriptedDie, SixSidedDie, DIE_SIDES};
pub use crate::engine::{CompletionRule, GameBuilder, GameEngine, GamePhase, TurnRecord};
pub use crate::error::GameError;
