//! Core types: players and dice.
//!
//! This module contains the building blocks the rest of the engine is
//! assembled from. The die is a trait so drivers and tests can inject
//! their own roll source.

pub mod die;
pub mod player;

pub use die::{Die, ScriptedDie, SixSidedDie, DIE_SIDES};
pub use player::{Player, PlayerId};
