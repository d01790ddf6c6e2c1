//! The grid-movement primitive: positions, collision layers, and the
//! directional probe that resolves one move attempt.

use bevy_ecs::{component::Component, entity::Entity};
use bitflags::bitflags;
use glam::IVec2;

use crate::direction::Direction;

/// A cell position on the board grid.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub IVec2);

bitflags! {
    /// Physics layers an entity participates in.
    #[derive(Component, Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CollisionLayer: u8 {
        /// Occupies its cell; move attempts into it are blocked.
        const BLOCKING = 1 << 0;
        /// Fires an overlap event when the player shares its cell.
        const TRIGGER = 1 << 1;
    }
}

/// State owned by a destructible obstacle.
///
/// The obstacle owns its destruction threshold; the controller only applies
/// damage to `integrity` and never despawns the entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub integrity: i32,
}

/// The transient result of one directional move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The destination cell was free; the mover advances to it.
    Moved(IVec2),
    /// The destination cell is occupied by this blocking entity.
    Blocked(Entity),
}

/// Probes one cell in `direction` from `from` against the blockable category.
///
/// `blockers` is the set of candidate `(entity, cell, layer)` tuples; only
/// entities on [`CollisionLayer::BLOCKING`] can obstruct the move. Trigger
/// entities (pickups, the exit) never block — walking onto them is how they
/// are collected.
pub fn attempt_move<I>(from: IVec2, direction: Direction, blockers: I) -> MoveOutcome
where
    I: IntoIterator<Item = (Entity, IVec2, CollisionLayer)>,
{
    let destination = from + direction.as_ivec2();

    for (entity, cell, layer) in blockers {
        if cell == destination && layer.contains(CollisionLayer::BLOCKING) {
            return MoveOutcome::Blocked(entity);
        }
    }

    MoveOutcome::Moved(destination)
}
