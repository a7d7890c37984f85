//! Grid bounds and single-step movement.
//!
//! The grid is always square. [`GridSize`] carries the side length and is the
//! only thing movement needs to know about the world.
//!
//! # Contract
//!
//! [`move_in_direction`] never checks bounds. Every caller must first ask
//! [`can_move_in_direction`] (or go through
//! [`move_in_direction_with_bounce`](crate::move_in_direction_with_bounce),
//! which does so itself).

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::direction::Direction;
use crate::position::Position;

/// Errors raised when constructing grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid must contain at least one cell.
    #[error("grid size must be at least 1, got {size}")]
    TooSmall {
        /// The rejected side length.
        size: u32,
    },
    /// Coordinates on the grid must fit in an `i32`.
    #[error("grid size must be at most {max}, got {size}")]
    TooLarge {
        /// The rejected side length.
        size: u32,
        /// Largest representable side length.
        max: u32,
    },
}

/// Side length of a square grid.
///
/// Always between 1 and [`GridSize::MAX`]. A size-1 grid is legal here (it is the degenerate case
/// where a bouncing token can never move); game layouts impose their own,
/// stricter minimum.
///
/// # Example
///
/// ```
/// use gridwalk::{GridSize, Position};
///
/// let grid = GridSize::new(5).unwrap();
/// assert_eq!(grid.max_index(), 4);
/// assert!(grid.contains(Position::new(4, 0)));
/// assert!(!grid.contains(Position::new(5, 0)));
/// assert!(GridSize::new(0).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridSize(u32);

impl GridSize {
    /// Largest side length whose coordinates fit in an `i32`.
    #[allow(clippy::cast_sign_loss)]
    pub const MAX: u32 = i32::MAX as u32;

    /// Creates a grid size.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `size` is zero and
    /// [`GridError::TooLarge`] if it exceeds [`GridSize::MAX`].
    pub const fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            Err(GridError::TooSmall { size })
        } else if size > Self::MAX {
            Err(GridError::TooLarge {
                size,
                max: Self::MAX,
            })
        } else {
            Ok(Self(size))
        }
    }

    /// Returns the side length.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the largest valid coordinate on either axis.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn max_index(self) -> i32 {
        self.0 as i32 - 1
    }

    /// Returns true if `position` lies on the grid.
    #[must_use]
    pub const fn contains(self, position: Position) -> bool {
        let max = self.max_index();
        position.x >= 0 && position.x <= max && position.y >= 0 && position.y <= max
    }

    /// Iterates every cell, row by row from `y = 0`.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let max = self.max_index();
        (0..=max).flat_map(move |y| (0..=max).map(move |x| Position::new(x, y)))
    }
}

impl TryFrom<u32> for GridSize {
    type Error = GridError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for u32 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Returns true if one step in `direction` from `position` stays on the grid.
///
/// North and east need room below the maximum index; south and west need
/// room above zero. Only the axis the direction moves along is checked.
#[must_use]
pub const fn can_move_in_direction(direction: Direction, position: Position, grid: GridSize) -> bool {
    match direction {
        Direction::North => position.y < grid.max_index(),
        Direction::South => position.y > 0,
        Direction::East => position.x < grid.max_index(),
        Direction::West => position.x > 0,
    }
}

/// Takes one unit step in `direction`, with no bounds check.
///
/// The result is only meaningful if [`can_move_in_direction`] returned true
/// for the same arguments.
#[must_use]
pub fn move_in_direction(direction: Direction, position: Position) -> Position {
    Position::from(position.as_ivec2() + direction.offset())
}

bitflags! {
    /// The set of directions a token can step in from a given cell.
    ///
    /// A corner has two exits, an edge three, an interior cell all four.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Exits: u8 {
        /// A step north stays on the grid.
        const NORTH = 1 << 0;
        /// A step east stays on the grid.
        const EAST  = 1 << 1;
        /// A step south stays on the grid.
        const SOUTH = 1 << 2;
        /// A step west stays on the grid.
        const WEST  = 1 << 3;
    }
}

impl Exits {
    /// Returns the flag for a single direction.
    #[must_use]
    pub const fn of(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::NORTH,
            Direction::East => Self::EAST,
            Direction::South => Self::SOUTH,
            Direction::West => Self::WEST,
        }
    }

    /// Returns true if `direction` is in the set.
    #[must_use]
    pub const fn allows(self, direction: Direction) -> bool {
        self.contains(Self::of(direction))
    }

    /// Iterates the contained directions in clockwise order from north.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::CLOCKWISE
            .into_iter()
            .filter(move |d| self.allows(*d))
    }
}

/// Returns every direction a token at `position` can step in.
#[must_use]
pub fn exits(position: Position, grid: GridSize) -> Exits {
    Direction::CLOCKWISE
        .into_iter()
        .filter(|d| can_move_in_direction(*d, position, grid))
        .fold(Exits::empty(), |set, d| set | Exits::of(d))
}
