//! Scavengers turn-engine library crate.

pub mod constants;
pub mod direction;
pub mod error;
pub mod events;
pub mod game;
pub mod session;
pub mod systems;
