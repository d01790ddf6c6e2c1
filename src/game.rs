//! This module contains the level orchestration and activation/deactivation
//! hand-off around the turn engine's ECS world.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::IVec2;
use tracing::{debug, info};

use crate::error::GameError;
use crate::events::{AnimationTrigger, DamageEvent, GameEvent, LevelEvent};
use crate::session::PlayerSession;
use crate::systems::{
    audio_system, collision_system, damage_system, item_system, player_turn_system, transition_system, ActorStats,
    AudioResource, AudioState, AxisInput, CollisionLayer, ControlState, DelayedTransition, GoldDisplay, HealthDisplay,
    NullOutput, Obstacle, PickupKind, PickupTable, PlayerBundle, PlayerControlled, Position, TriggerKind,
};

/// Host-supplied description of one level's board.
#[derive(Debug, Clone, Default)]
pub struct LevelLayout {
    pub player_start: IVec2,
    /// Obstacle cells with their starting integrity.
    pub walls: Vec<(IVec2, i32)>,
    pub pickups: Vec<(IVec2, PickupKind)>,
    pub exit: IVec2,
}

impl LevelLayout {
    /// A rectangular room enclosed by obstacle walls, with the player in the
    /// bottom-left corner and the exit in the top-right.
    pub fn walled_room(width: i32, height: i32) -> LevelLayout {
        let mut walls = Vec::new();
        for x in 0..width {
            for y in 0..height {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    walls.push((IVec2::new(x, y), 10));
                }
            }
        }

        LevelLayout {
            player_start: IVec2::new(1, 1),
            walls,
            pickups: Vec::new(),
            exit: IVec2::new(width - 2, height - 2),
        }
    }
}

/// One active level of the turn engine.
///
/// Owns the ECS `World` and `Schedule`; the [`PlayerSession`] moves in at
/// activation and back out through [`Game::take_session`] when the level is
/// torn down. The host drives it one [`Game::tick`] per simulation frame.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Activates a level: builds the world, pulls the actor's stats from the
    /// session, and renders both displays.
    pub fn new(session: PlayerSession, layout: &LevelLayout) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, session);
        Self::spawn_level(&mut world, layout);
        Self::configure_schedule(&mut schedule);

        let session = world.resource::<PlayerSession>();
        info!(
            level = session.level,
            health = session.health_points,
            gold = session.gold_points,
            "Level activated"
        );

        Game { world, schedule }
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<crate::systems::AudioEvent>(world);
        EventRegistry::register_event::<AnimationTrigger>(world);
        EventRegistry::register_event::<DamageEvent>(world);
        EventRegistry::register_event::<LevelEvent>(world);
    }

    fn insert_resources(world: &mut World, session: PlayerSession) {
        let mut health_display = HealthDisplay::default();
        let mut gold_display = GoldDisplay::default();
        health_display.show(session.health_points);
        gold_display.show(session.gold_points);

        world.insert_resource(session);
        world.insert_resource(AxisInput::default());
        world.insert_resource(PickupTable::default());
        world.insert_resource(health_display);
        world.insert_resource(gold_display);
        world.insert_resource(AudioState::from_entropy());
        world.insert_non_send_resource(AudioResource(Box::new(NullOutput)));
    }

    fn spawn_level(world: &mut World, layout: &LevelLayout) {
        // Activation hand-off: the controller takes ownership of the totals.
        let (health, gold) = {
            let session = world.resource::<PlayerSession>();
            (session.health_points, session.gold_points)
        };

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position(layout.player_start),
            stats: ActorStats { health, gold },
            control: ControlState::InputEnabled,
        });

        for (cell, integrity) in &layout.walls {
            world.spawn((
                Position(*cell),
                CollisionLayer::BLOCKING,
                Obstacle {
                    integrity: *integrity,
                },
            ));
        }

        for (cell, kind) in &layout.pickups {
            world.spawn((Position(*cell), CollisionLayer::TRIGGER, TriggerKind::Pickup(*kind)));
        }

        world.spawn((Position(layout.exit), CollisionLayer::TRIGGER, TriggerKind::Exit));

        debug!(
            walls = layout.walls.len(),
            pickups = layout.pickups.len(),
            "Level entities spawned"
        );
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.add_systems(
            (
                player_turn_system,
                collision_system,
                item_system,
                damage_system,
                transition_system,
                audio_system,
            )
                .chain(),
        );
    }

    /// Advances the simulation by one tick.
    ///
    /// Returns `true` once the run has ended.
    pub fn tick(&mut self) -> bool {
        Self::update_events(&mut self.world);
        self.schedule.run(&mut self.world);
        self.world.resource::<PlayerSession>().run_over
    }

    // Event buffers are double-buffered; updating once per tick keeps events
    // sent by the host before the tick readable through the whole schedule.
    fn update_events(world: &mut World) {
        world.resource_mut::<Events<GameError>>().update();
        world.resource_mut::<Events<GameEvent>>().update();
        world.resource_mut::<Events<crate::systems::AudioEvent>>().update();
        world.resource_mut::<Events<AnimationTrigger>>().update();
        world.resource_mut::<Events<DamageEvent>>().update();
        world.resource_mut::<Events<LevelEvent>>().update();
    }

    /// Writes the sampled input axes for the next tick.
    pub fn set_axis_input(&mut self, horizontal: i32, vertical: i32) {
        self.world.insert_resource(AxisInput::new(horizontal, vertical));
    }

    /// Hands the turn to the player. In a full game the turn arbiter calls
    /// this after the enemies have moved.
    pub fn grant_turn(&mut self) {
        self.world.resource_mut::<PlayerSession>().players_turn = true;
    }

    /// Drains level-load requests produced by expired transitions.
    pub fn drain_level_events(&mut self) -> Vec<LevelEvent> {
        self.world.resource_mut::<Events<LevelEvent>>().drain().collect()
    }

    /// Cancels any scheduled level transition. Returns the number of pending
    /// transitions that were discarded.
    pub fn cancel_pending_transition(&mut self) -> usize {
        let mut query = self.world.query_filtered::<Entity, With<DelayedTransition>>();
        let pending: Vec<Entity> = query.iter(&self.world).collect();

        for entity in &pending {
            self.world.despawn(*entity);
        }

        if !pending.is_empty() {
            debug!(count = pending.len(), "Pending transitions canceled");
        }
        pending.len()
    }

    /// Deactivates the level: flushes the actor's stats back into the
    /// session and returns it for the next level (or the host's post-run
    /// bookkeeping).
    pub fn take_session(mut self) -> PlayerSession {
        let mut query = self.world.query_filtered::<&ActorStats, With<PlayerControlled>>();
        let stats = query.single(&self.world).copied();

        if let Ok(stats) = stats {
            let mut session = self.world.resource_mut::<PlayerSession>();
            session.health_points = stats.health;
            session.gold_points = stats.gold;
        }

        self.world
            .remove_resource::<PlayerSession>()
            .expect("PlayerSession could not be acquired")
    }
}
