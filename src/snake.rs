use serde::Serialize;

use crate::config::BoardConfig;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// The origin is the top-left corner; `x` grows rightward and `y` grows
/// downward. Equality is value equality.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Returns the neighboring position one cell along `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the board.
    #[must_use]
    pub fn in_bounds(self, config: BoardConfig) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(config.width)
            && self.y < i32::from(config.height)
    }
}

/// Builds the starting snake: horizontal, head first, extending leftward one
/// cell per segment.
///
/// The head x is the larger of `initial_length - 1` and the grid center, so
/// every trailing segment stays at `x >= 0` for any length up to the width.
#[must_use]
pub fn initial_snake(config: BoardConfig) -> Vec<Point> {
    let head_x = i32::from(config.initial_length - 1).max(i32::from(config.width / 2));
    let head_y = i32::from(config.height / 2);

    (0..i32::from(config.initial_length))
        .map(|offset| Point {
            x: head_x - offset,
            y: head_y,
        })
        .collect()
}
