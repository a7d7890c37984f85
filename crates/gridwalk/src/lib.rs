//! # Gridwalk
//!
//! Geometry and motion primitives for a square grid of rooms.
//!
//! Gridwalk knows nothing about players, mobs or winning. It answers three
//! questions for any token on the grid:
//!
//! - **Can it step?** [`can_move_in_direction`] and [`exits`]
//! - **Where does a step land?** [`move_in_direction`]
//! - **How does a wall-bouncing token move?** [`move_in_direction_with_bounce`]
//!
//! plus the compass arithmetic for turning in place
//! ([`rotate_player_direction`]).
//!
//! ## Coordinates
//!
//! Positions are 0-indexed `(x, y)` pairs. North is `+y`, east is `+x`, so
//! `(0, 0)` is the south-west corner.
//!
//! ## Quick Start
//!
//! ```
//! use gridwalk::{move_in_direction_with_bounce, Direction, GridSize, Position};
//!
//! let grid = GridSize::new(3).unwrap();
//! let motion = move_in_direction_with_bounce(Direction::North, Position::new(1, 2), grid);
//!
//! assert_eq!(motion.position, Position::new(1, 1));
//! assert_eq!(motion.direction, Direction::South);
//! assert!(motion.bounced);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bounce;
pub mod direction;
pub mod grid;
pub mod position;

// Re-exports for convenience
pub use bounce::{move_in_direction_with_bounce, Motion};
pub use direction::{bounce_direction, rotate_player_direction, Direction, Rotation};
pub use grid::{can_move_in_direction, exits, move_in_direction, Exits, GridError, GridSize};
pub use position::Position;
