//! # Doorway Core
//!
//! Turn engine for Doorway, a one-room-at-a-time grid game.
//!
//! The player walks a square dungeon toward a target while a mob patrols it,
//! bouncing off the walls. The player only ever sees the room straight
//! ahead: a wall, or a door that may hide the mob or the target.
//!
//! ## Architecture
//!
//! - **State**: [`GameState`] snapshots, never edited in place by callers
//! - **Resolvers**: facing, movement, outcome; run in order each turn
//! - **Engine**: [`TurnEngine`] maps (snapshot, intent) to the next snapshot
//! - **Session**: [`Session`] owns the current snapshot, the intent log and
//!   the observers
//! - **View**: [`WorldView`] answers what the player can see
//!
//! Grid geometry (directions, bounds, wall bounces) lives in [`gridwalk`].
//!
//! ## Usage
//!
//! ```rust
//! use doorway_core::{GameStatus, Intent, Session};
//!
//! let mut session = Session::canonical();
//! session.apply(Intent::Advance).unwrap();
//!
//! let room = session.view().adjacent_room();
//! assert!(room.has_exit);
//! assert_eq!(session.state().status(), GameStatus::Playing);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export gridwalk for geometry types
pub use gridwalk;

pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod input;
pub mod intent;
pub mod observer;
pub mod observers;
pub mod resolver;
pub mod session;
pub mod state;
pub mod world_view;

#[cfg(test)]
mod tests;

pub use config::GameConfig;
pub use engine::TurnEngine;
pub use entity::{Mob, MobId, Occupant, Player};
pub use error::{ConfigError, TurnError};
pub use input::{classify_swipe, GestureConfig};
pub use intent::{Intent, IntentKind, Transition, TurnEvent, TurnRecord};
pub use observer::{ObserverRegistry, TurnObserver};
pub use session::Session;
pub use state::{GameState, GameStatus, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use world_view::{get_adjacent_room_info, AdjacentRoomInfo, MobSighting, WorldView};
