//! Centralized error types for the turn engine.
//!
//! Game-logic "failures" (blocked moves, health depletion, unknown overlap
//! tags) are ordinary branches, not errors. The error types here cover the
//! remaining fault class: programming-contract violations between the
//! controller and its collaborators, reported as events so systems can fail
//! fast without panicking.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::Event;

/// Main error type for the turn engine.
///
/// This is the primary error type that should be used in public APIs.
/// Derives `Event` so systems can report faults through an `EventWriter`.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to entity operations.
#[derive(thiserror::Error, Debug)]
pub enum EntityError {
    /// A move was blocked by an entity that carries no obstacle state.
    ///
    /// The movement primitive only dispatches blocked moves against the
    /// blockable category, so reaching this means the world was assembled
    /// with a blocking entity outside that category.
    #[error("Blocking entity {0:?} carries no obstacle state")]
    NotAnObstacle(Entity),

    /// The pickup rule table has no entry for a classified pickup kind.
    #[error("No pickup rule configured for {0}")]
    MissingPickupRule(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
