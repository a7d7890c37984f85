//! Structured turn logging.

use tracing::{debug, info};

use crate::intent::{TurnEvent, TurnRecord};
use crate::observer::TurnObserver;
use crate::state::{GameState, GameStatus};

/// Logs each turn's events at debug level and game endings at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates the observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TurnObserver for TracingObserver {
    fn name(&self) -> &str {
        "tracing"
    }

    fn on_transition(&self, record: &TurnRecord, state: &GameState) {
        for event in &record.events {
            match *event {
                TurnEvent::Rotated { from, to } => {
                    debug!(turn = record.turn, %from, %to, "player rotated");
                }
                TurnEvent::PlayerMoved { from, to } => {
                    debug!(turn = record.turn, %from, %to, "player moved");
                }
                TurnEvent::PlayerBlocked { at, facing } => {
                    debug!(turn = record.turn, %at, %facing, "player blocked by wall");
                }
                TurnEvent::MobMoved {
                    id,
                    from,
                    to,
                    direction,
                    bounced,
                } => {
                    debug!(turn = record.turn, mob = %id, %from, %to, %direction, bounced, "mob moved");
                }
                TurnEvent::Won { .. } | TurnEvent::Caught { .. } => {}
            }
        }

        match record.status {
            GameStatus::Won => {
                info!(turn = record.turn, at = %state.player().position, "player reached the target");
            }
            GameStatus::GameOver => {
                info!(turn = record.turn, at = %state.player().position, mob = %state.mob().id, "player caught");
            }
            GameStatus::Playing => {}
        }
    }

    fn on_reset(&self, state: &GameState) {
        info!(
            grid = %state.grid(),
            player = %state.player().position,
            mob = %state.mob().position,
            target = %state.target(),
            "game reset"
        );
    }
}
