//! Starting layout configuration.
//!
//! A [`GameConfig`] describes where everything starts. It deserializes with
//! every field optional, falling back to the canonical layout, so a host can
//! override just the pieces it cares about:
//!
//! ```
//! use doorway_core::config::GameConfig;
//! use gridwalk::Position;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "target": { "x": 2, "y": 4 } }"#).unwrap();
//! let state = config.build().unwrap();
//!
//! assert_eq!(state.target(), Position::new(2, 4));
//! assert_eq!(state.grid().get(), 5);
//! ```

use gridwalk::{Direction, GridSize, Position};
use serde::{Deserialize, Serialize};

use crate::entity::{Mob, MobId, Player};
use crate::error::ConfigError;
use crate::state::GameState;

/// Starting layout for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: u32,
    /// Player starting cell.
    pub player: Position,
    /// Player starting facing.
    pub facing: Direction,
    /// Mob identity, starting cell and heading.
    pub mob: Mob,
    /// Target cell.
    pub target: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        let canonical = GameState::canonical();
        Self {
            grid_size: canonical.grid().get(),
            player: canonical.player().position,
            facing: canonical.player().facing,
            mob: canonical.mob(),
            target: canonical.target(),
        }
    }
}

impl GameConfig {
    /// Returns a config for an empty-ish game on a grid of `grid_size`, with
    /// the player and target in opposite corners and the mob parked in the
    /// middle heading east.
    #[must_use]
    pub fn with_grid_size(grid_size: u32) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let max = grid_size.saturating_sub(1) as i32;
        Self {
            grid_size,
            player: Position::ORIGIN,
            facing: Direction::North,
            mob: Mob::new(MobId::new(1), Position::new(max / 2, max / 2), Direction::East),
            target: Position::new(max, max),
        }
    }

    /// Validates the layout and produces the opening snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the grid is too small or too large, or any
    /// token starts off the grid.
    pub fn build(&self) -> Result<GameState, ConfigError> {
        let grid = GridSize::new(self.grid_size)?;
        GameState::from_parts(
            Player::new(self.player, self.facing),
            self.mob,
            self.target,
            grid,
        )
    }
}
