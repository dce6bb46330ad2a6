//! Turn orchestration: the game engine, its builder, and turn records.
//!
//! Drivers configure a game through [`GameBuilder`], then call
//! [`GameEngine::take_turn`] until [`GameEngine::is_completed`] reports
//! true. The engine never depends on any particular event-dispatch
//! mechanism; a UI button handler and a plain loop drive it the same
//! way.

pub mod game;
pub mod record;

pub use game::{CompletionRule, GameBuilder, GameEngine, GamePhase};
pub use record::TurnRecord;
