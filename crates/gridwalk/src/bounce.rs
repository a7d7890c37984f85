//! Bounce motion: straight-line travel that reverses at walls.

use serde::{Deserialize, Serialize};

use crate::direction::{bounce_direction, Direction};
use crate::grid::{can_move_in_direction, move_in_direction, GridSize};
use crate::position::Position;

/// Result of one bounce step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Motion {
    /// Where the token ended up.
    pub position: Position,
    /// The direction it will keep travelling in.
    pub direction: Direction,
    /// Whether the direction was reversed this step.
    pub bounced: bool,
}

/// Advances a wall-bouncing token by one step.
///
/// If the token cannot step in `direction`, it first reverses. It then steps
/// in the (possibly reversed) direction if that is possible, and otherwise
/// stays where it is while keeping the reversed direction. That last case
/// only arises on a single-cell grid.
///
/// At most one reversal and one step happen per call.
///
/// `position` must already be on the grid.
///
/// # Example
///
/// ```
/// use gridwalk::{move_in_direction_with_bounce, Direction, GridSize, Position};
///
/// let grid = GridSize::new(3).unwrap();
/// let motion = move_in_direction_with_bounce(Direction::South, Position::new(0, 0), grid);
///
/// assert_eq!(motion.position, Position::new(0, 1));
/// assert_eq!(motion.direction, Direction::North);
/// ```
#[must_use]
pub fn move_in_direction_with_bounce(direction: Direction, position: Position, grid: GridSize) -> Motion {
    debug_assert!(grid.contains(position), "bounce from off-grid position {position}");

    let bounced = !can_move_in_direction(direction, position, grid);
    let direction = if bounced {
        bounce_direction(direction)
    } else {
        direction
    };

    let position = if can_move_in_direction(direction, position, grid) {
        move_in_direction(direction, position)
    } else {
        position
    };

    Motion {
        position,
        direction,
        bounced,
    }
}
