//! A running game: current snapshot, intent log and observers.
//!
//! [`Session`] is what a host holds on to. It serializes intents (one is
//! fully processed before the next is accepted, enforced by `&mut self`),
//! keeps the intent log for replay, and fans every transition out to its
//! observers.
//!
//! # Example
//!
//! ```
//! use doorway_core::intent::Intent;
//! use doorway_core::session::Session;
//! use doorway_core::state::GameStatus;
//!
//! let mut session = Session::canonical();
//! session.apply(Intent::TURN_RIGHT).unwrap();
//! session.apply(Intent::Advance).unwrap();
//!
//! assert_eq!(session.state().turn(), 2);
//! assert_eq!(session.intents().len(), 2);
//! assert_eq!(session.state().status(), GameStatus::Playing);
//!
//! session.reset();
//! assert_eq!(session.state().turn(), 0);
//! assert!(session.intents().is_empty());
//! ```

use std::sync::Arc;

use glam::Vec2;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::TurnEngine;
use crate::error::{ConfigError, TurnError};
use crate::input::{classify_swipe, GestureConfig};
use crate::intent::{Intent, Transition, TurnRecord};
use crate::observer::{ObserverRegistry, TurnObserver};
use crate::state::GameState;
use crate::world_view::WorldView;

/// One game, from its opening layout to the current turn.
#[derive(Debug)]
pub struct Session {
    engine: TurnEngine,
    gestures: GestureConfig,
    initial: GameState,
    current: GameState,
    intents: Vec<Intent>,
    observers: ObserverRegistry,
}

impl Session {
    /// Starts a game from a validated layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the layout is invalid.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::start(config.build()?))
    }

    /// Starts a game from the canonical layout.
    #[must_use]
    pub fn canonical() -> Self {
        Self::start(GameState::canonical())
    }

    /// Starts a game from an opening snapshot.
    ///
    /// Resets return to this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the snapshot breaks an invariant, or
    /// [`ConfigError::Finished`] if it is already terminal.
    pub fn from_state(initial: GameState) -> Result<Self, ConfigError> {
        initial.validate()?;
        if initial.is_terminal() {
            return Err(ConfigError::Finished {
                status: initial.status(),
            });
        }
        Ok(Self::start(initial))
    }

    fn start(initial: GameState) -> Self {
        Self {
            engine: TurnEngine::new(),
            gestures: GestureConfig::default(),
            current: initial.clone(),
            initial,
            intents: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Replaces the turn engine.
    #[must_use]
    pub fn with_engine(mut self, engine: TurnEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replaces the gesture tuning.
    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    /// Registers an observer.
    pub fn observe(&mut self, observer: Arc<dyn TurnObserver>) {
        debug!(observer = observer.name(), "observer registered");
        self.observers.register(observer);
    }

    /// Returns the registered observers.
    #[must_use]
    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.current
    }

    /// Returns the opening snapshot.
    #[must_use]
    pub fn initial(&self) -> &GameState {
        &self.initial
    }

    /// Returns a renderer view of the current snapshot.
    #[must_use]
    pub fn view(&self) -> WorldView<'_> {
        WorldView::new(&self.current)
    }

    /// Returns every accepted intent since the last reset.
    #[must_use]
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Processes one intent and notifies observers.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Finished`] if the game has ended; the session is
    /// left unchanged and observers are not notified.
    pub fn apply(&mut self, intent: Intent) -> Result<TurnRecord, TurnError> {
        let Transition { state, record } = self.engine.transition(&self.current, intent)?;
        self.current = state;
        self.intents.push(intent);
        self.observers.notify_transition(&record, &self.current);
        Ok(record)
    }

    /// Turns the player in place.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Finished`] if the game has ended.
    pub fn rotate(&mut self, clockwise: bool) -> Result<TurnRecord, TurnError> {
        self.apply(Intent::Rotate { clockwise })
    }

    /// Steps the player forward and moves the mob.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Finished`] if the game has ended.
    pub fn advance(&mut self) -> Result<TurnRecord, TurnError> {
        self.apply(Intent::Advance)
    }

    /// Classifies a swipe and applies the resulting intent, if any.
    ///
    /// Returns `Ok(None)` when the swipe does not map to an intent.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Finished`] if the swipe maps to an intent and the
    /// game has ended.
    pub fn swipe(&mut self, translation: Vec2) -> Result<Option<TurnRecord>, TurnError> {
        match classify_swipe(translation, &self.gestures) {
            Some(intent) => self.apply(intent).map(Some),
            None => Ok(None),
        }
    }

    /// Discards the game and starts again from the opening snapshot.
    pub fn reset(&mut self) {
        info!(
            turns = self.current.turn(),
            status = %self.current.status(),
            "session reset"
        );
        self.current = self.initial.clone();
        self.intents.clear();
        self.observers.notify_reset(&self.current);
    }

    /// Replays the intent log from the opening snapshot.
    ///
    /// Always equals [`state`](Self::state); exposed so hosts can verify a
    /// stored log.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError`] if the log contains an intent after the game
    /// ended, which cannot happen for a log produced by this session.
    pub fn replay(&self) -> Result<GameState, TurnError> {
        self.engine.replay(&self.initial, self.intents.iter().copied())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameStatus;
    use gridwalk::{Direction, Position};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter {
        turns: AtomicUsize,
        resets: AtomicUsize,
    }

    impl TurnObserver for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn on_transition(&self, _record: &TurnRecord, _state: &GameState) {
            self.turns.fetch_add(1, Ordering::Relaxed);
        }

        fn on_reset(&self, _state: &GameState) {
            self.resets.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn caught_session() -> Session {
        let config = GameConfig {
            player: Position::new(0, 0),
            facing: Direction::North,
            mob: crate::entity::Mob::new(
                crate::entity::MobId::new(1),
                Position::new(0, 2),
                Direction::South,
            ),
            ..GameConfig::default()
        };
        Session::new(&config).unwrap()
    }

    #[test]
    fn apply_records_intent_and_notifies() {
        let counter = Arc::new(Counter::default());
        let mut session = Session::canonical();
        session.observe(counter.clone());

        let record = session.advance().unwrap();
        assert_eq!(record.turn, 1);
        assert_eq!(session.intents(), &[Intent::Advance]);
        assert_eq!(counter.turns.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn rejected_intent_leaves_session_untouched() {
        let counter = Arc::new(Counter::default());
        let mut session = caught_session();
        session.observe(counter.clone());

        session.advance().unwrap();
        assert_eq!(session.state().status(), GameStatus::GameOver);

        let before = session.state().clone();
        assert_eq!(
            session.rotate(true),
            Err(TurnError::Finished {
                status: GameStatus::GameOver
            })
        );
        assert_eq!(session.state(), &before);
        assert_eq!(session.intents().len(), 1);
        assert_eq!(counter.turns.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn reset_restores_opening_snapshot() {
        let counter = Arc::new(Counter::default());
        let mut session = caught_session();
        session.observe(counter.clone());
        let opening = session.state().clone();

        session.advance().unwrap();
        session.reset();

        assert_eq!(session.state(), &opening);
        assert!(session.intents().is_empty());
        assert_eq!(counter.resets.load(Ordering::Relaxed), 1);
        assert!(session.advance().is_ok());
    }

    #[test]
    fn swipe_maps_to_intents() {
        let mut session = Session::canonical();
        assert_eq!(session.swipe(Vec2::new(3.0, 4.0)), Ok(None));
        assert_eq!(session.state().turn(), 0);

        let record = session.swipe(Vec2::new(90.0, 0.0)).unwrap().unwrap();
        assert_eq!(record.intent, Intent::TURN_RIGHT);
        assert_eq!(session.state().player().facing, Direction::East);
    }

    #[test]
    fn replay_matches_live_state() {
        let mut session = Session::canonical();
        for intent in [Intent::Advance, Intent::TURN_RIGHT, Intent::Advance, Intent::Advance] {
            session.apply(intent).unwrap();
        }
        assert_eq!(session.replay().unwrap(), *session.state());
    }

    #[test]
    fn finished_opening_snapshot_is_rejected() {
        let mut session = caught_session();
        session.advance().unwrap();
        let finished = session.state().clone();

        assert_eq!(
            Session::from_state(finished).unwrap_err(),
            ConfigError::Finished {
                status: GameStatus::GameOver
            }
        );
    }

    #[test]
    fn invalid_opening_snapshot_is_rejected() {
        let mut state = GameState::canonical();
        state.target = Position::new(7, 7);
        assert!(matches!(
            Session::from_state(state),
            Err(ConfigError::OutOfBounds { .. })
        ));
        assert!(Session::from_state(GameState::canonical()).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::with_grid_size(1);
        assert!(Session::new(&config).is_err());
    }
}
