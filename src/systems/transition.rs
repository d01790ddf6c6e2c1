use bevy_ecs::{
    component::Component,
    entity::Entity,
    event::EventWriter,
    system::{Commands, Query},
};
use tracing::info;

use crate::events::LevelEvent;

/// A scheduled level load, counting down in ticks.
///
/// Spawned when the player reaches the exit; the controller locks itself the
/// same tick, so the countdown runs while the world is otherwise idle.
/// Despawning the entity before it expires cancels the transition — see
/// [`Game::cancel_pending_transition`](crate::game::Game::cancel_pending_transition).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedTransition {
    pub level: u32,
    pub remaining_ticks: u32,
}

impl DelayedTransition {
    pub fn new(level: u32, ticks: u32) -> Self {
        Self {
            level,
            remaining_ticks: ticks,
        }
    }
}

/// Counts down pending transitions and fires the level load when one expires.
pub fn transition_system(
    mut commands: Commands,
    mut pending: Query<(Entity, &mut DelayedTransition)>,
    mut levels: EventWriter<LevelEvent>,
) {
    for (entity, mut transition) in pending.iter_mut() {
        if transition.remaining_ticks <= 1 {
            info!(level = transition.level, "Delayed transition fired");
            levels.write(LevelEvent::Load {
                level: transition.level,
            });
            commands.entity(entity).despawn();
        } else {
            transition.remaining_ticks -= 1;
        }
    }
}
