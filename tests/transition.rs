use bevy_ecs::query::With;
use glam::IVec2;
use pretty_assertions::assert_eq;

use scavengers::constants::mechanics::STARTING_HEALTH;
use scavengers::constants::transition::EXIT_DELAY_TICKS;
use scavengers::events::LevelEvent;
use scavengers::game::LevelLayout;
use scavengers::systems::{ControlState, DelayedTransition, PlayerControlled};

mod common;

/// An empty room with the exit one step east of the player.
fn exit_next_door() -> LevelLayout {
    let mut layout = common::empty_room();
    layout.exit = IVec2::new(2, 1);
    layout
}

fn control_state(game: &mut scavengers::game::Game) -> ControlState {
    let mut query = game.world.query_filtered::<&ControlState, With<PlayerControlled>>();
    *query.single(&game.world).unwrap()
}

#[test]
fn test_exit_schedules_transition_and_locks_input() {
    let (mut game, _recording) = common::new_game(&exit_next_door());

    common::step(&mut game, 1, 0);

    let mut pending = game.world.query::<&DelayedTransition>();
    let transition = *pending.single(&game.world).unwrap();
    assert_eq!(transition.level, 2);
    assert_eq!(control_state(&mut game), ControlState::InputLocked);

    // Both totals flush to the session on exit contact.
    let session = common::session(&game);
    assert_eq!(session.health_points, STARTING_HEALTH - 1);
    assert_eq!(session.gold_points, 0);
}

#[test]
fn test_locked_countdown_consumes_no_turns() {
    let (mut game, _recording) = common::new_game(&exit_next_door());
    common::step(&mut game, 1, 0);

    // Input keeps arriving while the countdown runs; none of it lands.
    for _ in 0..10 {
        common::step(&mut game, 1, 0);
    }

    let (position, stats) = common::player_state(&mut game);
    assert_eq!(position, IVec2::new(2, 1));
    assert_eq!(stats.health, STARTING_HEALTH - 1);
}

#[test]
fn test_standing_on_exit_schedules_only_once() {
    let (mut game, _recording) = common::new_game(&exit_next_door());
    common::step(&mut game, 1, 0);

    // The overlap re-fires every tick while the player stands there.
    for _ in 0..5 {
        game.tick();
    }

    let mut pending = game.world.query::<&DelayedTransition>();
    assert_eq!(pending.iter(&game.world).count(), 1);
}

#[test]
fn test_transition_fires_after_the_delay() {
    let (mut game, _recording) = common::new_game(&exit_next_door());
    common::step(&mut game, 1, 0);

    let mut fired_after = None;
    for waited in 1..=EXIT_DELAY_TICKS + 1 {
        game.tick();
        if let Some(LevelEvent::Load { level }) = game.drain_level_events().pop() {
            assert_eq!(level, 2);
            fired_after = Some(waited);
            break;
        }
    }

    // The load request arrives once the full delay has elapsed, not before.
    let waited = fired_after.expect("transition never fired");
    assert!(waited >= EXIT_DELAY_TICKS - 1);
    assert!(waited <= EXIT_DELAY_TICKS);

    let mut pending = game.world.query::<&DelayedTransition>();
    assert_eq!(pending.iter(&game.world).count(), 0);
}

#[test]
fn test_canceled_transition_never_fires() {
    let (mut game, _recording) = common::new_game(&exit_next_door());
    common::step(&mut game, 1, 0);

    // Step off the exit first so the overlap cannot reschedule it.
    {
        let mut query = game
            .world
            .query_filtered::<&mut scavengers::systems::Position, With<PlayerControlled>>();
        query.single_mut(&mut game.world).unwrap().0 = IVec2::new(3, 1);
    }
    assert_eq!(game.cancel_pending_transition(), 1);
    assert_eq!(game.cancel_pending_transition(), 0);

    for _ in 0..EXIT_DELAY_TICKS + 5 {
        game.tick();
        assert!(game.drain_level_events().is_empty());
    }
}
