//! Tokens that live on the grid.
//!
//! - [`Player`]: the token the host controls, with a facing
//! - [`Mob`]: the bouncing hazard, with a direction of travel
//! - [`Occupant`]: classification of what sits in a cell
//!
//! The target is just a [`Position`] and has no type of its own.
//!
//! # Example
//!
//! ```
//! use doorway_core::entity::{Mob, MobId};
//! use gridwalk::{Direction, GridSize, Position};
//!
//! let mob = Mob::new(MobId::new(1), Position::new(2, 1), Direction::East);
//! let (next, motion) = mob.bounced(GridSize::new(3).unwrap());
//!
//! assert_eq!(next.position, Position::new(1, 1));
//! assert_eq!(next.direction, Direction::West);
//! assert!(motion.bounced);
//! ```

use std::fmt;

use gridwalk::{move_in_direction_with_bounce, Direction, GridSize, Motion, Position};
use serde::{Deserialize, Serialize};

/// Stable identifier of a mob.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MobId(u32);

impl MobId {
    /// Creates a new `MobId` from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for MobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MobId({})", self.0)
    }
}

impl fmt::Display for MobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MobId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// The player token.
///
/// Facing is changed by rotation and is the direction an advance moves in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Current cell.
    pub position: Position,
    /// Compass direction the player looks towards.
    pub facing: Direction,
}

impl Player {
    /// Creates a player at `position` looking `facing`.
    #[must_use]
    pub const fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }
}

/// The mob: a hazard that travels in a straight line and reverses at walls.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mob {
    /// Identity, stable for the whole game.
    pub id: MobId,
    /// Current cell.
    pub position: Position,
    /// Direction of travel.
    pub direction: Direction,
}

impl Mob {
    /// Creates a mob.
    #[must_use]
    pub const fn new(id: MobId, position: Position, direction: Direction) -> Self {
        Self {
            id,
            position,
            direction,
        }
    }

    /// Returns the mob after one bounce step, along with the raw motion.
    #[must_use]
    pub fn bounced(self, grid: GridSize) -> (Self, Motion) {
        let motion = move_in_direction_with_bounce(self.direction, self.position, grid);
        let next = Self {
            position: motion.position,
            direction: motion.direction,
            ..self
        };
        (next, motion)
    }
}

/// What occupies a cell.
///
/// When several tokens share a cell, the one with the lowest
/// [`code`](Occupant::code) is the one that is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupant {
    /// The player token.
    Player,
    /// The mob.
    Mob,
    /// The target cell.
    Target,
}

impl Occupant {
    /// Numeric code used by flat board encodings (0 is reserved for empty).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Player => 1,
            Self::Mob => 2,
            Self::Target => 3,
        }
    }

    /// Single-character map glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Player => 'P',
            Self::Mob => 'M',
            Self::Target => 'X',
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Mob => write!(f, "mob"),
            Self::Target => write!(f, "target"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounced_keeps_identity() {
        let mob = Mob::new(MobId::new(7), Position::new(0, 0), Direction::West);
        let (next, _) = mob.bounced(GridSize::new(5).unwrap());
        assert_eq!(next.id, MobId::new(7));
        assert_eq!(next.position, Position::new(1, 0));
        assert_eq!(next.direction, Direction::East);
    }

    #[test]
    fn bounced_does_not_touch_original() {
        let mob = Mob::new(MobId::new(1), Position::new(3, 3), Direction::East);
        let (next, motion) = mob.bounced(GridSize::new(5).unwrap());
        assert_eq!(mob.position, Position::new(3, 3));
        assert_eq!(next.position, Position::new(4, 3));
        assert!(!motion.bounced);
    }

    #[test]
    fn occupant_priority_follows_code() {
        assert!(Occupant::Player < Occupant::Mob);
        assert!(Occupant::Mob < Occupant::Target);
        assert!(Occupant::Player.code() < Occupant::Mob.code());
    }

    #[test]
    fn mob_id_serializes_as_number() {
        let json = serde_json::to_string(&MobId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
