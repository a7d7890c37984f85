//! Built-in observers.
//!
//! - [`TracingObserver`]: logs every turn as structured `tracing` events
//! - [`MapObserver`]: logs an ASCII map of the dungeon after every turn
//!
//! Neither is registered by default; hosts opt in via
//! [`Session::observe`](crate::session::Session::observe).

mod map;
mod tracing_log;

pub use map::{render_map, MapObserver};
pub use tracing_log::TracingObserver;
