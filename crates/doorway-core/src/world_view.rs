//! What the player can see: the room straight ahead.
//!
//! The game is presented one room at a time. Looking along their facing, the
//! player sees either a wall (the grid ends) or a door into the adjacent
//! cell, and behind that door possibly the mob and possibly the target.
//!
//! Everything here is a read-only projection of a [`GameState`]. Nothing is
//! cached: visibility depends only on the current snapshot, so it is
//! recomputed every time it is asked for.
//!
//! # Example
//!
//! ```
//! use doorway_core::state::GameState;
//! use doorway_core::world_view::{MobSighting, WorldView};
//!
//! let state = GameState::canonical();
//! let room = WorldView::new(&state).adjacent_room();
//!
//! // Player at (0,0) facing north: a door to (0,1), which is empty.
//! assert!(room.has_exit);
//! assert_eq!(room.mob, MobSighting::NoMob);
//! assert!(!room.has_target);
//! ```

use gridwalk::{can_move_in_direction, exits, move_in_direction, Direction, Exits, GridSize, Position};
use serde::{Deserialize, Serialize};

use crate::entity::Player;
use crate::state::{GameState, GameStatus};

/// Whether the mob is in the room ahead, and if so which way it is heading.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MobSighting {
    /// The room is empty of mobs, or there is no room (a wall).
    #[default]
    NoMob,
    /// The mob is in the room ahead.
    MobPresent {
        /// The mob's direction of travel.
        direction: Direction,
    },
}

/// Contents of the room ahead of the player.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjacentRoomInfo {
    /// True if there is a door (the cell ahead is on the grid), false for a
    /// wall.
    pub has_exit: bool,
    /// Mob presence. Always [`MobSighting::NoMob`] behind a wall.
    pub mob: MobSighting,
    /// Target presence. Always false behind a wall.
    pub has_target: bool,
}

impl AdjacentRoomInfo {
    /// Returns true if the mob is in the room ahead.
    #[must_use]
    pub const fn has_mob(&self) -> bool {
        matches!(self.mob, MobSighting::MobPresent { .. })
    }

    /// Returns the mob's direction if it is in the room ahead.
    #[must_use]
    pub const fn mob_direction(&self) -> Option<Direction> {
        match self.mob {
            MobSighting::MobPresent { direction } => Some(direction),
            MobSighting::NoMob => None,
        }
    }
}

/// Classifies the cell immediately ahead of the player.
///
/// If the player faces the edge of the grid there is no exit, and mob and
/// target presence are reported as absent regardless of where they are.
/// Otherwise each is present exactly when it occupies the cell ahead.
#[must_use]
pub fn get_adjacent_room_info(
    player_position: Position,
    facing: Direction,
    grid: GridSize,
    mob_position: Position,
    mob_direction: Direction,
    target_position: Position,
) -> AdjacentRoomInfo {
    if !can_move_in_direction(facing, player_position, grid) {
        return AdjacentRoomInfo::default();
    }

    let ahead = move_in_direction(facing, player_position);
    let mob = if ahead == mob_position {
        MobSighting::MobPresent {
            direction: mob_direction,
        }
    } else {
        MobSighting::NoMob
    };

    AdjacentRoomInfo {
        has_exit: true,
        mob,
        has_target: ahead == target_position,
    }
}

/// Read-only view of a snapshot for renderers.
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    state: &'a GameState,
}

impl<'a> WorldView<'a> {
    /// Creates a view over `state`.
    #[must_use]
    pub const fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Returns the snapshot being viewed.
    #[must_use]
    pub const fn state(&self) -> &'a GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> Player {
        self.state.player
    }

    /// Returns the direction the player is facing.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.state.player.facing
    }

    /// Returns the game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Returns the room ahead of the player.
    #[must_use]
    pub fn adjacent_room(&self) -> AdjacentRoomInfo {
        let state = self.state;
        get_adjacent_room_info(
            state.player.position,
            state.player.facing,
            state.grid,
            state.mob.position,
            state.mob.direction,
            state.target,
        )
    }

    /// Returns every direction the player could walk from here.
    #[must_use]
    pub fn exits(&self) -> Exits {
        exits(self.state.player.position, self.state.grid)
    }
}

impl GameState {
    /// Returns the room ahead of the player.
    #[must_use]
    pub fn adjacent_room(&self) -> AdjacentRoomInfo {
        WorldView::new(self).adjacent_room()
    }
}
