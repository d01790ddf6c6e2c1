//! The two text sinks of the display feedback surface.
//!
//! Both are plain string resources, rewritten synchronously by whichever
//! system changes the underlying value. The host renders them however it
//! likes; the strings themselves are part of the contract (pickup and damage
//! annotations included).

use bevy_ecs::resource::Resource;

/// Text sink for the player's health total.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct HealthDisplay(pub String);

impl HealthDisplay {
    /// Plain refresh: `Health: {health}`.
    pub fn show(&mut self, health: i32) {
        self.0 = format!("Health: {health}");
    }

    /// Pickup annotation: `+{gain} Health: {health}`.
    pub fn show_gain(&mut self, gain: i32, health: i32) {
        self.0 = format!("+{gain} Health: {health}");
    }

    /// Damage annotation: `-{loss} Health: {health}`.
    pub fn show_loss(&mut self, loss: i32, health: i32) {
        self.0 = format!("-{loss} Health: {health}");
    }
}

/// Text sink for the player's gold total.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct GoldDisplay(pub String);

impl GoldDisplay {
    /// Plain refresh: `Gold:{gold}`.
    pub fn show(&mut self, gold: i32) {
        self.0 = format!("Gold:{gold}");
    }

    /// Pickup annotation: `+{gain} Gold:{gold}`.
    pub fn show_gain(&mut self, gain: i32, gold: i32) {
        self.0 = format!("+{gain} Gold:{gold}");
    }
}
