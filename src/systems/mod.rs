//! The ECS systems, components, and resources of the turn engine.

pub mod audio;
pub mod collision;
pub mod hud;
pub mod input;
pub mod item;
pub mod movement;
pub mod player;
pub mod transition;

pub use audio::{audio_system, AudioEvent, AudioOutput, AudioResource, AudioState, Cue, NullOutput};
pub use collision::collision_system;
pub use hud::{GoldDisplay, HealthDisplay};
pub use input::AxisInput;
pub use item::{item_system, PickupKind, PickupRule, PickupTable, ResourceKind, TriggerKind};
pub use movement::{attempt_move, CollisionLayer, MoveOutcome, Obstacle, Position};
pub use player::{
    check_if_game_over, damage_system, player_turn_system, ActorStats, ControlState, PlayerBundle, PlayerControlled,
};
pub use transition::{transition_system, DelayedTransition};
