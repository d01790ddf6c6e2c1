//! This module contains all the tuning constants used by the turn engine.

/// Gameplay mechanics constants.
pub mod mechanics {
    /// Health points paid for taking a turn, whether or not the move lands.
    pub const TURN_COST: i32 = 1;
    /// Damage applied to an obstacle's integrity when a blocked move attacks it.
    pub const WALL_DAMAGE: i32 = 1;
    /// Health the persistent authority starts a fresh run with.
    pub const STARTING_HEALTH: i32 = 100;
}

/// Points credited per pickup kind.
pub mod points {
    pub const FOOD: i32 = 10;
    pub const GOOD_FOOD: i32 = 20;
    pub const SMALL_GOLD: i32 = 10;
    pub const LARGE_GOLD: i32 = 15;
    pub const HUGE_GOLD: i32 = 25;
}

/// Level transition constants.
pub mod transition {
    /// Ticks between stepping on the exit and the level load firing (1 second at 60 ticks/s).
    pub const EXIT_DELAY_TICKS: u32 = 60;
}
