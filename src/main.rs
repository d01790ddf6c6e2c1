//! Scripted terminal demo: walks one level, cashes in the exit transition,
//! then ends the run with external damage on the next level.

use anyhow::Result;
use glam::IVec2;
use tracing::{event, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

use scavengers::events::{DamageEvent, LevelEvent};
use scavengers::game::{Game, LevelLayout};
use scavengers::session::PlayerSession;
use scavengers::systems::{GoldDisplay, HealthDisplay, PickupKind};

fn demo_layout() -> LevelLayout {
    let mut layout = LevelLayout::walled_room(8, 4);
    layout.pickups = vec![
        (IVec2::new(2, 1), PickupKind::Food),
        (IVec2::new(3, 1), PickupKind::SmallGold),
        (IVec2::new(4, 1), PickupKind::HugeGold),
    ];
    layout.exit = IVec2::new(6, 1);
    layout
}

fn print_status(game: &Game) {
    let health = &game.world.resource::<HealthDisplay>().0;
    let gold = &game.world.resource::<GoldDisplay>().0;
    info!("{health} | {gold}");
}

fn main() -> Result<()> {
    // Setup tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut session = PlayerSession::default();

    event!(tracing::Level::INFO, "Starting scripted run");

    // Level 1: walk east across the pickups onto the exit.
    let mut game = Game::new(session, &demo_layout());
    for _ in 0..6 {
        game.grant_turn();
        game.set_axis_input(1, 0);
        game.tick();
        print_status(&game);
    }

    // Idle until the delayed transition fires.
    let next_level = loop {
        game.tick();
        if let Some(LevelEvent::Load { level }) = game.drain_level_events().pop() {
            break level;
        }
    };

    session = game.take_session();
    session.level = next_level;
    info!(
        level = session.level,
        health = session.health_points,
        gold = session.gold_points,
        "Carrying session into next level"
    );

    // Level 2: an off-screen attacker ends the run.
    let mut game = Game::new(session, &LevelLayout::walled_room(5, 5));
    game.world.send_event(DamageEvent { loss: 500 });
    let run_over = game.tick();
    print_status(&game);

    session = game.take_session();
    info!(run_over, gold = session.gold_points, "Run finished");
    Ok(())
}
