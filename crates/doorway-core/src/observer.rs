//! Observers: collaborators notified after every turn.
//!
//! The turn engine never prints or logs game boards itself. Anything that
//! wants to watch a game (logging, debug maps, a renderer's animation queue)
//! implements [`TurnObserver`] and is registered on a
//! [`Session`](crate::session::Session), which notifies it after each
//! accepted intent and after each reset.
//!
//! Observers only ever receive shared references: they can look, not touch.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::sync::Arc;
//!
//! use doorway_core::intent::{Intent, TurnRecord};
//! use doorway_core::observer::TurnObserver;
//! use doorway_core::session::Session;
//! use doorway_core::state::GameState;
//!
//! #[derive(Default)]
//! struct TurnCounter(AtomicU64);
//!
//! impl TurnObserver for TurnCounter {
//!     fn name(&self) -> &str {
//!         "turn_counter"
//!     }
//!
//!     fn on_transition(&self, _record: &TurnRecord, _state: &GameState) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = Arc::new(TurnCounter::default());
//! let mut session = Session::canonical();
//! session.observe(counter.clone());
//!
//! session.apply(Intent::Advance).unwrap();
//! session.apply(Intent::TURN_LEFT).unwrap();
//! assert_eq!(counter.0.load(Ordering::Relaxed), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::intent::TurnRecord;
use crate::state::GameState;

/// Something that watches a game.
pub trait TurnObserver: Send + Sync {
    /// Short identifier used in logs and debug output.
    fn name(&self) -> &str;

    /// Called after an intent was accepted, with the resulting snapshot.
    fn on_transition(&self, record: &TurnRecord, state: &GameState);

    /// Called after the game was reset, with the fresh snapshot.
    fn on_reset(&self, _state: &GameState) {}
}

/// Ordered collection of observers.
///
/// Observers are notified in registration order.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn TurnObserver>>,
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|o| o.name()))
            .finish()
    }
}

impl ObserverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer.
    pub fn register(&mut self, observer: Arc<dyn TurnObserver>) {
        self.observers.push(observer);
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Iterates the registered observers.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn TurnObserver>> {
        self.observers.iter()
    }

    /// Notifies every observer of a transition.
    pub fn notify_transition(&self, record: &TurnRecord, state: &GameState) {
        for observer in &self.observers {
            observer.on_transition(record, state);
        }
    }

    /// Notifies every observer of a reset.
    pub fn notify_reset(&self, state: &GameState) {
        for observer in &self.observers {
            observer.on_reset(state);
        }
    }
}
