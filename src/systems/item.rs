use bevy_ecs::{
    component::Component,
    event::{EventReader, EventWriter},
    query::With,
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use tracing::{debug, trace};

use crate::{
    constants::{points, transition::EXIT_DELAY_TICKS},
    error::{EntityError, GameError},
    events::GameEvent,
    session::PlayerSession,
    systems::{
        hud::{GoldDisplay, HealthDisplay},
        player::{ActorStats, ControlState, PlayerControlled},
        transition::DelayedTransition,
        AudioEvent, Cue,
    },
};

/// The closed set of resource-crediting pickups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter)]
pub enum PickupKind {
    Food,
    GoodFood,
    SmallGold,
    LargeGold,
    HugeGold,
}

/// Which of the actor's resources a pickup credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Health,
    Gold,
}

/// The configured effect of collecting one pickup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupRule {
    pub value: i32,
    pub resource: ResourceKind,
    pub cues: (Cue, Cue),
}

/// Static mapping from pickup kind to resource effect and feedback cues.
///
/// Adding a pickup kind is a data change here plus a `PickupKind` variant;
/// `item_system` itself never branches on individual kinds.
#[derive(Resource, Debug)]
pub struct PickupTable([(PickupKind, PickupRule); 5]);

impl Default for PickupTable {
    fn default() -> Self {
        PickupTable([
            (
                PickupKind::Food,
                PickupRule {
                    value: points::FOOD,
                    resource: ResourceKind::Health,
                    cues: (Cue::EatA, Cue::EatB),
                },
            ),
            (
                PickupKind::GoodFood,
                PickupRule {
                    value: points::GOOD_FOOD,
                    resource: ResourceKind::Health,
                    cues: (Cue::SlurpA, Cue::SlurpB),
                },
            ),
            (
                PickupKind::SmallGold,
                PickupRule {
                    value: points::SMALL_GOLD,
                    resource: ResourceKind::Gold,
                    cues: (Cue::GoldA, Cue::GoldB),
                },
            ),
            (
                PickupKind::LargeGold,
                PickupRule {
                    value: points::LARGE_GOLD,
                    resource: ResourceKind::Gold,
                    cues: (Cue::GoldA, Cue::GoldB),
                },
            ),
            (
                PickupKind::HugeGold,
                PickupRule {
                    value: points::HUGE_GOLD,
                    resource: ResourceKind::Gold,
                    cues: (Cue::GoldA, Cue::GoldB),
                },
            ),
        ])
    }
}

impl PickupTable {
    pub fn rule(&self, kind: PickupKind) -> Option<&PickupRule> {
        self.0.iter().find(|(k, _)| *k == kind).map(|(_, rule)| rule)
    }
}

/// Classification carried by entities the player can overlap.
///
/// Entities without this component are silently ignored by `item_system`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Pickup(PickupKind),
    Exit,
}

/// Resolves overlap events into resource credits and level transitions.
///
/// Runs every tick regardless of turn ownership — overlap delivery belongs to
/// the physics cadence, not the turn cadence. Gold credits are pushed to the
/// persistent session immediately; health credits stay local until the
/// controller deactivates. That asymmetry is deliberate and load-bearing: the
/// session must show the final gold total even if the run ends before the
/// level does.
#[allow(clippy::too_many_arguments)]
pub fn item_system(
    mut commands: Commands,
    mut overlaps: EventReader<GameEvent>,
    table: Res<PickupTable>,
    mut session: ResMut<PlayerSession>,
    mut health_display: ResMut<HealthDisplay>,
    mut gold_display: ResMut<GoldDisplay>,
    mut players: Query<(&mut ActorStats, &mut ControlState), With<PlayerControlled>>,
    triggers: Query<&TriggerKind>,
    mut audio: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    for event in overlaps.read() {
        let GameEvent::Overlap(entity_a, entity_b) = *event;

        // One side must be the player; the other is the contacted entity.
        let (player, other) = if players.contains(entity_a) {
            (entity_a, entity_b)
        } else if players.contains(entity_b) {
            (entity_b, entity_a)
        } else {
            continue;
        };

        let Ok((mut stats, mut control)) = players.get_mut(player) else {
            continue;
        };

        let Ok(kind) = triggers.get(other) else {
            trace!(?other, "Overlap with untagged entity ignored");
            continue;
        };

        match kind {
            TriggerKind::Exit => {
                // Standing on the exit re-fires the overlap every tick; only
                // the first contact schedules the transition.
                if *control == ControlState::InputLocked {
                    continue;
                }

                // Leaving the level deactivates the controller, so both
                // stats flush to the authority now.
                session.health_points = stats.health;
                session.gold_points = stats.gold;
                *control = ControlState::InputLocked;

                let next_level = session.level + 1;
                commands.spawn(DelayedTransition::new(next_level, EXIT_DELAY_TICKS));
                debug!(next_level, delay_ticks = EXIT_DELAY_TICKS, "Exit reached, transition scheduled");
            }
            TriggerKind::Pickup(pickup) => {
                let Some(rule) = table.rule(*pickup) else {
                    // A closed enum plus a total default table makes this
                    // unreachable unless a host swapped in a partial table.
                    errors.write(EntityError::MissingPickupRule(pickup.to_string()).into());
                    continue;
                };

                match rule.resource {
                    ResourceKind::Health => {
                        stats.health += rule.value;
                        health_display.show_gain(rule.value, stats.health);
                    }
                    ResourceKind::Gold => {
                        stats.gold += rule.value;
                        gold_display.show_gain(rule.value, stats.gold);
                        // Immediate propagation, unlike health.
                        session.gold_points = stats.gold;
                    }
                }

                audio.write(AudioEvent::PlayOneOf(rule.cues.0, rule.cues.1));

                // Remove the pickup so it cannot be collected twice.
                commands.entity(other).despawn();
                debug!(kind = %pickup, value = rule.value, health = stats.health, gold = stats.gold, "Pickup collected");
            }
        }
    }
}
