//! The game snapshot.
//!
//! [`GameState`] is the aggregate root: player, mob, target, grid size,
//! status and turn counter. It is never edited in place by callers. The
//! [`TurnEngine`](crate::engine::TurnEngine) clones the current snapshot,
//! lets its resolvers write the clone, and hands the clone back as the next
//! snapshot.
//!
//! # Invariants
//!
//! - Every position (player, mob, target) lies on the grid.
//! - The grid is at least [`MIN_GRID_SIZE`] cells wide.
//! - Once [`GameStatus`] is terminal it never changes again; only a fresh
//!   snapshot (a reset) leaves it.
//!
//! # Example
//!
//! ```
//! use doorway_core::state::{GameState, GameStatus};
//! use gridwalk::{Direction, Position};
//!
//! let state = GameState::canonical();
//! assert_eq!(state.player().position, Position::new(0, 0));
//! assert_eq!(state.player().facing, Direction::North);
//! assert_eq!(state.target(), Position::new(4, 4));
//! assert_eq!(state.status(), GameStatus::Playing);
//! ```

use std::fmt;

use gridwalk::{Direction, GridSize, Position};
use serde::{Deserialize, Serialize};

use crate::entity::{Mob, MobId, Occupant, Player};
use crate::error::ConfigError;

/// Smallest grid a game can be played on.
pub const MIN_GRID_SIZE: u32 = 2;

/// Largest grid a game can be played on.
pub const MAX_GRID_SIZE: u32 = 1024;

const CANONICAL_GRID: GridSize = match GridSize::new(5) {
    Ok(grid) => grid,
    Err(_) => unreachable!(),
};

/// Where the game stands.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Intents are accepted.
    #[default]
    Playing,
    /// The player reached the target.
    Won,
    /// The mob caught the player.
    GameOver,
}

impl GameStatus {
    /// Returns true for `Won` and `GameOver`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::GameOver)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::GameOver => write!(f, "game_over"),
        }
    }
}

/// One immutable snapshot of the game.
///
/// Deserialization runs [`validate`](GameState::validate), so a snapshot
/// read from JSON upholds the same invariants as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SnapshotFields")]
pub struct GameState {
    pub(crate) player: Player,
    pub(crate) mob: Mob,
    pub(crate) target: Position,
    pub(crate) grid: GridSize,
    pub(crate) status: GameStatus,
    /// Intents processed since this game started.
    pub(crate) turn: u64,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct SnapshotFields {
    player: Player,
    mob: Mob,
    target: Position,
    grid: GridSize,
    status: GameStatus,
    turn: u64,
}

impl TryFrom<SnapshotFields> for GameState {
    type Error = ConfigError;

    fn try_from(fields: SnapshotFields) -> Result<Self, Self::Error> {
        let state = Self {
            player: fields.player,
            mob: fields.mob,
            target: fields.target,
            grid: fields.grid,
            status: fields.status,
            turn: fields.turn,
        };
        state.validate()?;
        Ok(state)
    }
}

impl GameState {
    /// The standard opening layout.
    ///
    /// A 5x5 grid, the player in the south-west corner facing north, the mob
    /// (id 1) at (3, 3) heading east, and the target in the north-east corner.
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            player: Player::new(Position::new(0, 0), Direction::North),
            mob: Mob::new(MobId::new(1), Position::new(3, 3), Direction::East),
            target: Position::new(4, 4),
            grid: CANONICAL_GRID,
            status: GameStatus::Playing,
            turn: 0,
        }
    }

    /// Builds a fresh, playing snapshot from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the grid is smaller than [`MIN_GRID_SIZE`],
    /// larger than [`MAX_GRID_SIZE`], or any token lies off the grid.
    pub fn from_parts(
        player: Player,
        mob: Mob,
        target: Position,
        grid: GridSize,
    ) -> Result<Self, ConfigError> {
        let state = Self {
            player,
            mob,
            target,
            grid,
            status: GameStatus::Playing,
            turn: 0,
        };
        state.validate()?;
        Ok(state)
    }

    /// Checks the snapshot invariants.
    ///
    /// Useful after deserializing a snapshot from an untrusted source.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.grid.get();
        if size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        if size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size,
                max: MAX_GRID_SIZE,
            });
        }

        let placements = [
            (Occupant::Player, self.player.position),
            (Occupant::Mob, self.mob.position),
            (Occupant::Target, self.target),
        ];
        for (occupant, position) in placements {
            if !self.grid.contains(position) {
                return Err(ConfigError::OutOfBounds {
                    occupant,
                    position,
                    size,
                });
            }
        }
        Ok(())
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// Returns the mob.
    #[must_use]
    pub const fn mob(&self) -> Mob {
        self.mob
    }

    /// Returns the target cell.
    #[must_use]
    pub const fn target(&self) -> Position {
        self.target
    }

    /// Returns the grid size.
    #[must_use]
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns the game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of intents processed since the game started.
    #[must_use]
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    /// Returns true if the game has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the highest-priority occupant of `position`, if any.
    ///
    /// Priority is player, then mob, then target.
    #[must_use]
    pub fn occupant_at(&self, position: Position) -> Option<Occupant> {
        if self.player.position == position {
            Some(Occupant::Player)
        } else if self.mob.position == position {
            Some(Occupant::Mob)
        } else if self.target == position {
            Some(Occupant::Target)
        } else {
            None
        }
    }

    /// Encodes the grid as occupant codes, row-major from `y = 0`.
    ///
    /// Empty cells are `0`; see [`Occupant::code`] for the rest.
    #[must_use]
    pub fn board(&self) -> Vec<u8> {
        self.grid
            .cells()
            .map(|cell| self.occupant_at(cell).map_or(0, Occupant::code))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::canonical()
    }
}
