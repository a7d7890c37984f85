//! Error types for layout validation and turn processing.
//!
//! Illegal moves are not errors: a blocked advance simply leaves the player
//! where they are. Errors only describe layouts that cannot start a game and
//! intents sent to a game that has already ended.

use gridwalk::{GridError, Position};
use thiserror::Error;

use crate::entity::Occupant;
use crate::state::GameStatus;

/// A starting layout that cannot produce a valid [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Grid side length rejected by the geometry layer.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Games need room to move.
    #[error("grid size {size} is too small for a game, minimum is {min}")]
    GridTooSmall {
        /// Requested side length.
        size: u32,
        /// Smallest playable side length.
        min: u32,
    },

    /// Boards beyond this size are not played.
    #[error("grid size {size} is too large for a game, maximum is {max}")]
    GridTooLarge {
        /// Requested side length.
        size: u32,
        /// Largest playable side length.
        max: u32,
    },

    /// A game cannot start from a snapshot that has already ended.
    #[error("opening snapshot has already finished with status {status}")]
    Finished {
        /// The terminal status.
        status: GameStatus,
    },

    /// A token was placed off the grid.
    #[error("{occupant} at {position} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Which token.
        occupant: Occupant,
        /// Where it was placed.
        position: Position,
        /// Grid side length.
        size: u32,
    },
}

/// An intent that could not be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game has reached a terminal status; only a reset can continue.
    #[error("game already finished with status {status}")]
    Finished {
        /// The terminal status.
        status: GameStatus,
    },
}
