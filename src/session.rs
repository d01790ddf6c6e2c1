use bevy_ecs::resource::Resource;
use tracing::info;

use crate::constants::mechanics::STARTING_HEALTH;

/// The persistent authority for player state across level loads.
///
/// A `PlayerSession` outlives any single level's `World`: the host creates it
/// once per run, hands it to [`Game::new`](crate::game::Game::new), and takes
/// it back via [`Game::take_session`](crate::game::Game::take_session) when
/// the level ends. While a level is active the controller owns the live
/// health/gold totals; the session only sees them again on deactivation, with
/// one exception — gold pickups propagate immediately (see
/// [`item_system`](crate::systems::item::item_system)).
///
/// This is the explicit context object that replaces a process-wide
/// singleton: nothing in the crate reaches for global state.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PlayerSession {
    /// Health points carried between levels.
    pub health_points: i32,
    /// Gold points carried between levels.
    pub gold_points: i32,
    /// Turn ownership flag, arbitrated by the host's turn loop.
    pub players_turn: bool,
    /// Set once the run has ended; further game-over checks are no-ops.
    pub run_over: bool,
    /// Index of the level currently being played.
    pub level: u32,
}

impl Default for PlayerSession {
    fn default() -> Self {
        PlayerSession {
            health_points: STARTING_HEALTH,
            gold_points: 0,
            players_turn: true,
            run_over: false,
            level: 1,
        }
    }
}

impl PlayerSession {
    /// Marks the run as ended. The host owns what happens next (restart
    /// screen, score persistence, and so on).
    pub fn notify_game_over(&mut self) {
        info!(
            health = self.health_points,
            gold = self.gold_points,
            level = self.level,
            "Game over"
        );
        self.run_over = true;
    }
}
