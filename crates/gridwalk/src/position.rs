//! Grid cell coordinates.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A cell on the grid.
///
/// Coordinates are signed so that an unchecked step off the grid produces a
/// detectably invalid value (`-1` or `size`) instead of wrapping around.
/// Whether a position is actually on a grid is answered by
/// [`GridSize::contains`](crate::GridSize::contains).
///
/// # Example
///
/// ```
/// use gridwalk::Position;
/// use glam::IVec2;
///
/// let p = Position::new(2, 3);
/// assert_eq!(p.as_ivec2(), IVec2::new(2, 3));
/// assert_eq!(Position::from(IVec2::new(2, 3)), p);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, increasing eastwards.
    pub x: i32,
    /// Row, increasing northwards.
    pub y: i32,
}

impl Position {
    /// The south-west corner.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position as a `glam` vector.
    #[must_use]
    pub const fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Position> for IVec2 {
    fn from(p: Position) -> Self {
        p.as_ivec2()
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_tuple_like() {
        assert_eq!(Position::new(4, 0).to_string(), "(4, 0)");
    }

    #[test]
    fn serializes_as_xy_object() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn origin_is_default() {
        assert_eq!(Position::default(), Position::ORIGIN);
    }
}
