//! Compass directions and in-place rotation.
//!
//! [`Direction`] is shared by two different concepts: the heading a mob
//! travels along, and the way the player is facing. Rotation only ever
//! applies to facing; opposite lookup only ever applies to travel.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A compass heading on the grid.
///
/// The cyclic order used for rotation is North → East → South → West → North.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards increasing `y`.
    North,
    /// Towards decreasing `y`.
    South,
    /// Towards increasing `x`.
    East,
    /// Towards decreasing `x`.
    West,
}

impl Direction {
    /// All directions in clockwise order, starting at north.
    pub const CLOCKWISE: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the unit offset of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::South => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Returns the direction one quarter-turn away.
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let index = self.clockwise_index();
        let next = match rotation {
            Rotation::Clockwise => (index + 1) % 4,
            Rotation::CounterClockwise => (index + 3) % 4,
        };
        Self::CLOCKWISE[next]
    }

    const fn clockwise_index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
            Self::East => write!(f, "east"),
            Self::West => write!(f, "west"),
        }
    }
}

/// A quarter-turn in place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// North → East → South → West.
    Clockwise,
    /// North → West → South → East.
    CounterClockwise,
}

impl From<bool> for Rotation {
    /// `true` is clockwise.
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// Returns the direction a bouncing token takes after hitting a wall.
///
/// The reflection policy is "reverse exactly": north and south swap, east
/// and west swap.
#[must_use]
pub const fn bounce_direction(direction: Direction) -> Direction {
    direction.opposite()
}

/// Turns the player's facing one step clockwise or counter-clockwise.
///
/// # Example
///
/// ```
/// use gridwalk::{rotate_player_direction, Direction};
///
/// assert_eq!(rotate_player_direction(Direction::North, true), Direction::East);
/// assert_eq!(rotate_player_direction(Direction::North, false), Direction::West);
/// ```
#[must_use]
pub fn rotate_player_direction(current: Direction, clockwise: bool) -> Direction {
    current.rotated(Rotation::from(clockwise))
}
