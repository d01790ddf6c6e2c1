use bevy_ecs::resource::Resource;

use crate::direction::Direction;

/// The two discrete input axes sampled each tick.
///
/// The host writes raw axis values here (keyboard, gamepad, whatever); the
/// turn system quantizes each to {-1, 0, 1} when resolving a move. The
/// resource persists between ticks, matching held-key behavior: the same
/// direction is attempted again the next time the player holds the turn.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AxisInput {
    pub horizontal: i32,
    pub vertical: i32,
}

impl AxisInput {
    pub fn new(horizontal: i32, vertical: i32) -> Self {
        AxisInput { horizontal, vertical }
    }

    /// Resolves the sampled axes into at most one cardinal direction.
    ///
    /// Movement is axis-exclusive by policy: a non-zero horizontal axis
    /// forces the vertical axis to zero, so diagonal attempts never occur.
    /// Both axes at zero resolve to `None` (no turn is consumed).
    pub fn direction(self) -> Option<Direction> {
        let horizontal = self.horizontal.signum();
        let vertical = if horizontal != 0 { 0 } else { self.vertical.signum() };

        match (horizontal, vertical) {
            (1, _) => Some(Direction::Right),
            (-1, _) => Some(Direction::Left),
            (_, 1) => Some(Direction::Up),
            (_, -1) => Some(Direction::Down),
            _ => None,
        }
    }
}
