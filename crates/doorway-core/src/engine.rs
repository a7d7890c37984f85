//! The turn engine: a pure function from (snapshot, intent) to snapshot.
//!
//! Each call runs three phases:
//!
//! 1. **GUARD**: reject the intent if the snapshot is terminal
//! 2. **RESOLUTION**: clone current into next, run every resolver that
//!    handles the intent's kind, in order
//! 3. **APPLY**: bump the turn counter and return the new snapshot
//!
//! The engine holds no game state, so the same engine can drive any number
//! of games and replaying a list of intents always gives the same result.
//!
//! # Example
//!
//! ```
//! use doorway_core::engine::TurnEngine;
//! use doorway_core::intent::Intent;
//! use doorway_core::state::{GameState, GameStatus};
//! use gridwalk::Position;
//!
//! let engine = TurnEngine::new();
//! let start = GameState::canonical();
//!
//! let next = engine.apply(&start, Intent::Advance).unwrap();
//! assert_eq!(next.player().position, Position::new(0, 1));
//! assert_eq!(next.mob().position, Position::new(4, 3));
//! assert_eq!(next.status(), GameStatus::Playing);
//!
//! // The input snapshot is untouched.
//! assert_eq!(start, GameState::canonical());
//! ```

use std::fmt;

use tracing::debug;

use crate::error::TurnError;
use crate::intent::{Intent, Transition, TurnRecord};
use crate::resolver::{FacingResolver, MovementResolver, OutcomeResolver, Resolver};
use crate::state::GameState;

/// Drives turns through an ordered list of resolvers.
pub struct TurnEngine {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl fmt::Debug for TurnEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnEngine")
            .field("resolvers", &format!("[{} resolvers]", self.resolvers.len()))
            .finish()
    }
}

impl TurnEngine {
    /// Creates an engine with the standard resolvers: facing, movement,
    /// outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolvers(vec![
            Box::new(FacingResolver::new()),
            Box::new(MovementResolver::new()),
            Box::new(OutcomeResolver::new()),
        ])
    }

    /// Creates an engine with a custom resolver order.
    #[must_use]
    pub fn with_resolvers(resolvers: Vec<Box<dyn Resolver>>) -> Self {
        Self { resolvers }
    }

    /// Processes one intent and returns the next snapshot with its record.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Finished`] if `current` is terminal.
    pub fn transition(&self, current: &GameState, intent: Intent) -> Result<Transition, TurnError> {
        if current.is_terminal() {
            debug!(turn = current.turn, status = %current.status, %intent, "intent rejected");
            return Err(TurnError::Finished {
                status: current.status,
            });
        }

        let mut next = current.clone();
        let mut events = Vec::new();
        let kind = intent.kind();
        for resolver in &self.resolvers {
            if resolver.handles().contains(&kind) {
                resolver.resolve(intent, current, &mut next, &mut events);
            }
        }
        next.turn += 1;

        debug_assert!(next.validate().is_ok(), "resolvers produced an invalid snapshot");
        debug!(
            turn = next.turn,
            %intent,
            player = %next.player.position,
            facing = %next.player.facing,
            mob = %next.mob.position,
            status = %next.status,
            "turn resolved"
        );

        let record = TurnRecord {
            turn: next.turn,
            intent,
            events,
            status: next.status,
        };
        Ok(Transition {
            state: next,
            record,
        })
    }

    /// Processes one intent and returns only the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Finished`] if `current` is terminal.
    pub fn apply(&self, current: &GameState, intent: Intent) -> Result<GameState, TurnError> {
        self.transition(current, intent).map(|t| t.state)
    }

    /// Folds a sequence of intents over `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Finished`] if an intent arrives after the game
    /// has ended.
    pub fn replay<I>(&self, initial: &GameState, intents: I) -> Result<GameState, TurnError>
    where
        I: IntoIterator<Item = Intent>,
    {
        intents
            .into_iter()
            .try_fold(initial.clone(), |state, intent| self.apply(&state, intent))
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::TurnEvent;
    use crate::state::GameStatus;
    use gridwalk::{Direction, Position};

    #[test]
    fn rotate_counts_as_a_turn_but_moves_nothing() {
        let engine = TurnEngine::new();
        let start = GameState::canonical();
        let t = engine.transition(&start, Intent::TURN_RIGHT).unwrap();

        assert_eq!(t.state.player().facing, Direction::East);
        assert_eq!(t.state.mob(), start.mob());
        assert_eq!(t.state.turn(), 1);
        assert_eq!(t.record.turn, 1);
        assert_eq!(t.record.events.len(), 1);
    }

    #[test]
    fn advance_records_events_in_resolution_order() {
        let engine = TurnEngine::new();
        let t = engine
            .transition(&GameState::canonical(), Intent::Advance)
            .unwrap();

        assert_eq!(
            t.record.events[0],
            TurnEvent::PlayerMoved {
                from: Position::new(0, 0),
                to: Position::new(0, 1),
            }
        );
        assert!(matches!(t.record.events[1], TurnEvent::MobMoved { .. }));
        assert_eq!(t.record.status, GameStatus::Playing);
    }

    #[test]
    fn terminal_state_rejects_intents() {
        let engine = TurnEngine::new();
        let mut finished = GameState::canonical();
        finished.status = GameStatus::Won;

        for intent in [Intent::Advance, Intent::TURN_LEFT] {
            assert_eq!(
                engine.apply(&finished, intent),
                Err(TurnError::Finished {
                    status: GameStatus::Won
                })
            );
        }
    }

    #[test]
    fn empty_engine_only_counts_turns() {
        let engine = TurnEngine::with_resolvers(Vec::new());
        let next = engine.apply(&GameState::canonical(), Intent::Advance).unwrap();
        assert_eq!(next.player(), GameState::canonical().player());
        assert_eq!(next.turn(), 1);
    }

    #[test]
    fn replay_folds_intents() {
        let engine = TurnEngine::new();
        let end = engine
            .replay(
                &GameState::canonical(),
                [Intent::Advance, Intent::Advance, Intent::TURN_RIGHT],
            )
            .unwrap();

        assert_eq!(end.player().position, Position::new(0, 2));
        assert_eq!(end.player().facing, Direction::East);
        // (3,3)E -> (4,3)E -> bounce -> (3,3)W
        assert_eq!(end.mob().position, Position::new(3, 3));
        assert_eq!(end.mob().direction, Direction::West);
        assert_eq!(end.turn(), 3);
    }

    #[test]
    fn engine_debug_hides_trait_objects() {
        let text = format!("{:?}", TurnEngine::new());
        assert!(text.contains("[3 resolvers]"));
    }
}
