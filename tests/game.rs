use glam::IVec2;
use pretty_assertions::assert_eq;

use scavengers::game::Game;
use scavengers::session::PlayerSession;
use scavengers::systems::PickupKind;

mod common;

#[test]
fn test_activation_pulls_stats_from_session() {
    let session = PlayerSession {
        health_points: 42,
        gold_points: 7,
        level: 3,
        ..Default::default()
    };
    let (mut game, _recording) = common::new_game_with_session(session, &common::empty_room());

    let (position, stats) = common::player_state(&mut game);
    assert_eq!(position, IVec2::new(1, 1));
    assert_eq!(stats.health, 42);
    assert_eq!(stats.gold, 7);

    // Both displays are rendered before the first tick.
    assert_eq!(common::health_text(&game), "Health: 42");
    assert_eq!(common::gold_text(&game), "Gold:7");
}

#[test]
fn test_session_carries_totals_between_levels() {
    let mut layout = common::empty_room();
    layout.pickups = vec![(IVec2::new(2, 1), PickupKind::GoodFood), (IVec2::new(3, 1), PickupKind::SmallGold)];
    let (mut game, _recording) = common::new_game(&layout);

    common::step(&mut game, 1, 0);
    common::step(&mut game, 1, 0);
    let (_, stats) = common::player_state(&mut game);

    let mut session = game.take_session();
    session.level += 1;
    let expected_health = stats.health;
    let expected_gold = stats.gold;

    let mut next = Game::new(session, &common::empty_room());
    let recording = common::install_recorder(&mut next);
    let (_, stats) = common::player_state(&mut next);
    assert_eq!(stats.health, expected_health);
    assert_eq!(stats.gold, expected_gold);
    assert_eq!(recording.cue_count(), 0);
}
