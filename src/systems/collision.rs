use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::Query;

use crate::events::GameEvent;
use crate::systems::movement::{CollisionLayer, Position};
use crate::systems::player::PlayerControlled;

/// Detects the player sharing a cell with trigger entities and emits overlap
/// events for the item system.
///
/// Grid cells make this an exact equality test; there is no collision radius.
/// Only [`CollisionLayer::TRIGGER`] entities participate — blocking entities
/// can never share a cell with the player because the movement primitive
/// refuses the move in the first place.
///
/// The physics role is deliberately separable: a host with its own overlap
/// detection can skip this system and send [`GameEvent::Overlap`] directly.
pub fn collision_system(
    players: Query<(Entity, &Position), With<PlayerControlled>>,
    triggers: Query<(Entity, &Position, &CollisionLayer), Without<PlayerControlled>>,
    mut events: EventWriter<GameEvent>,
) {
    for (player, player_position) in players.iter() {
        for (other, cell, layer) in triggers.iter() {
            if layer.contains(CollisionLayer::TRIGGER) && cell.0 == player_position.0 {
                events.write(GameEvent::Overlap(player, other));
            }
        }
    }
}
