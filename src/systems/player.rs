//! The player actor controller: the turn-consumption state machine, the
//! block-reaction, the external damage entry point, and the game-over check.

use bevy_ecs::{
    component::Component,
    entity::Entity,
    event::{EventReader, EventWriter},
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use tracing::{debug, trace, warn};

use crate::{
    constants::mechanics::{TURN_COST, WALL_DAMAGE},
    error::{EntityError, GameError},
    events::{AnimationTrigger, DamageEvent},
    session::PlayerSession,
    systems::{
        hud::{GoldDisplay, HealthDisplay},
        input::AxisInput,
        movement::{attempt_move, CollisionLayer, MoveOutcome, Obstacle, Position},
        AudioEvent, Cue,
    },
};

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// Whether the controller processes ticks.
///
/// Locked when the level ends (exit overlap); the delayed transition still
/// fires, but no further turns are consumed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    InputEnabled,
    InputLocked,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::InputEnabled
    }
}

/// The actor's live resource totals, owned by the controller while a level is
/// active.
///
/// Health may transiently go below zero immediately before the terminal
/// check; no floor is applied.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorStats {
    pub health: i32,
    pub gold: i32,
}

/// Everything the player entity spawns with.
#[derive(bevy_ecs::bundle::Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub stats: ActorStats,
    pub control: ControlState,
}

/// Ends the current life once health reaches zero.
///
/// Single-fire: once the session has been notified, later health drops are
/// ignored rather than re-notifying the host.
pub fn check_if_game_over(health: i32, session: &mut PlayerSession, audio: &mut EventWriter<AudioEvent>) {
    if health > 0 || session.run_over {
        return;
    }

    audio.write(AudioEvent::Play(Cue::GameOver));
    audio.write(AudioEvent::StopMusic);
    session.notify_game_over();
}

/// Resolves at most one turn-consuming move attempt per tick.
///
/// The contract, in order: a locked controller or a foreign turn is a no-op;
/// a zero input keeps the turn unconsumed; otherwise one health point is paid
/// up front, the movement primitive resolves the attempt, a blocked move
/// attacks the obstacle, and the turn is relinquished after the game-over
/// check — regardless of how the attempt went.
#[allow(clippy::too_many_arguments)]
pub fn player_turn_system(
    input: Res<AxisInput>,
    mut session: ResMut<PlayerSession>,
    mut health_display: ResMut<HealthDisplay>,
    mut gold_display: ResMut<GoldDisplay>,
    mut players: Query<(&mut Position, &mut ActorStats, &ControlState), With<PlayerControlled>>,
    blockers: Query<(Entity, &Position, &CollisionLayer), Without<PlayerControlled>>,
    mut obstacles: Query<&mut Obstacle>,
    mut audio: EventWriter<AudioEvent>,
    mut animations: EventWriter<AnimationTrigger>,
    mut errors: EventWriter<GameError>,
) {
    if !session.players_turn {
        return;
    }

    let Ok((mut position, mut stats, control)) = players.single_mut() else {
        errors.write(GameError::InvalidState(
            "Expected exactly one player-controlled entity".into(),
        ));
        return;
    };

    if *control == ControlState::InputLocked {
        return;
    }

    // A null input does not consume the turn.
    let Some(direction) = input.direction() else {
        return;
    };

    // The turn cost is paid unconditionally, landed or blocked.
    stats.health -= TURN_COST;
    health_display.show(stats.health);
    gold_display.show(stats.gold);

    let outcome = attempt_move(
        position.0,
        direction,
        blockers.iter().map(|(entity, cell, layer)| (entity, cell.0, *layer)),
    );

    match outcome {
        MoveOutcome::Moved(destination) => {
            trace!(?direction, from = ?position.0, to = ?destination, "Move landed");
            position.0 = destination;
            audio.write(AudioEvent::PlayOneOf(Cue::MoveA, Cue::MoveB));
        }
        MoveOutcome::Blocked(blocker) => {
            trace!(?direction, from = ?position.0, ?blocker, "Move blocked");
            on_cant_move(blocker, &mut obstacles, &mut animations, &mut errors);
        }
    }

    check_if_game_over(stats.health, &mut session, &mut audio);

    // Turn over; the arbiter decides when the player acts next.
    session.players_turn = false;
}

/// The block-reaction: attack whatever obstructed the move.
///
/// The movement primitive hands back a plain entity; it must carry
/// [`Obstacle`] state. Anything else on the blocking layer is a
/// world-assembly bug and is reported instead of silently skipped.
fn on_cant_move(
    blocker: Entity,
    obstacles: &mut Query<&mut Obstacle>,
    animations: &mut EventWriter<AnimationTrigger>,
    errors: &mut EventWriter<GameError>,
) {
    match obstacles.get_mut(blocker) {
        Ok(mut obstacle) => {
            obstacle.integrity -= WALL_DAMAGE;
            animations.write(AnimationTrigger::PlayerChop);
            debug!(?blocker, integrity = obstacle.integrity, "Obstacle attacked");
        }
        Err(_) => {
            warn!(?blocker, "Blocking entity carries no obstacle state");
            errors.write(EntityError::NotAnObstacle(blocker).into());
        }
    }
}

/// External damage entry point, independent of the turn cycle.
pub fn damage_system(
    mut damage: EventReader<DamageEvent>,
    mut session: ResMut<PlayerSession>,
    mut health_display: ResMut<HealthDisplay>,
    mut players: Query<&mut ActorStats, With<PlayerControlled>>,
    mut audio: EventWriter<AudioEvent>,
    mut animations: EventWriter<AnimationTrigger>,
) {
    for DamageEvent { loss } in damage.read() {
        let Ok(mut stats) = players.single_mut() else {
            continue;
        };

        animations.write(AnimationTrigger::PlayerHit);
        stats.health -= loss;
        health_display.show_loss(*loss, stats.health);
        debug!(loss, health = stats.health, "Player hit");

        check_if_game_over(stats.health, &mut session, &mut audio);
    }
}
