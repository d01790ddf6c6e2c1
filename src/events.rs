use bevy_ecs::prelude::*;

/// Events delivered by the physics layer (or the built-in `collision_system`).
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Two entities occupy the same cell; the first is the instigator.
    Overlap(Entity, Entity),
}

/// Damage dealt to the player by an external attacker.
///
/// Independent of the turn cycle; an enemy may send this at any time.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageEvent {
    pub loss: i32,
}

/// Named triggers for the host's animation layer.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationTrigger {
    /// The player swings at the obstacle blocking a move.
    PlayerChop,
    /// The player takes a hit from an external attacker.
    PlayerHit,
}

/// Requests for the host's level-transition mechanism.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelEvent {
    /// Load the level with the given index.
    Load { level: u32 },
}
