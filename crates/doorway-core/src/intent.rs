//! Player intents and the record of what a turn did.
//!
//! An [`Intent`] is the only input the core accepts. The
//! [`TurnEngine`](crate::engine::TurnEngine) answers every accepted intent
//! with a [`Transition`]: the next snapshot plus a [`TurnRecord`] listing the
//! [`TurnEvent`]s that produced it. Records are what observers see.

use std::fmt;

use gridwalk::{Direction, Position};
use serde::{Deserialize, Serialize};

use crate::entity::MobId;
use crate::state::{GameState, GameStatus};

/// Something the player wants to do this turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Turn in place.
    Rotate {
        /// `true` turns north → east, `false` turns north → west.
        clockwise: bool,
    },
    /// Step forward along the current facing.
    Advance,
}

impl Intent {
    /// Clockwise quarter-turn.
    pub const TURN_RIGHT: Self = Self::Rotate { clockwise: true };
    /// Counter-clockwise quarter-turn.
    pub const TURN_LEFT: Self = Self::Rotate { clockwise: false };

    /// Returns the routing kind of this intent.
    #[must_use]
    pub const fn kind(self) -> IntentKind {
        match self {
            Self::Rotate { .. } => IntentKind::Rotate,
            Self::Advance => IntentKind::Advance,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotate { clockwise: true } => write!(f, "rotate clockwise"),
            Self::Rotate { clockwise: false } => write!(f, "rotate counter-clockwise"),
            Self::Advance => write!(f, "advance"),
        }
    }
}

/// Intent discriminant used to route intents to resolvers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    /// [`Intent::Rotate`]
    Rotate,
    /// [`Intent::Advance`]
    Advance,
}

/// One fact about what happened during a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TurnEvent {
    /// The player turned in place.
    Rotated {
        /// Facing before.
        from: Direction,
        /// Facing after.
        to: Direction,
    },
    /// The player stepped into the room ahead.
    PlayerMoved {
        /// Cell before.
        from: Position,
        /// Cell after.
        to: Position,
    },
    /// The player faced a wall and stayed put.
    PlayerBlocked {
        /// Where the player stayed.
        at: Position,
        /// The blocked facing.
        facing: Direction,
    },
    /// The mob took its bounce step.
    MobMoved {
        /// Which mob.
        id: MobId,
        /// Cell before.
        from: Position,
        /// Cell after.
        to: Position,
        /// Heading after the step.
        direction: Direction,
        /// Whether it reversed at a wall.
        bounced: bool,
    },
    /// The player reached the target.
    Won {
        /// The target cell.
        at: Position,
    },
    /// The mob and the player ended the turn in the same cell.
    Caught {
        /// The shared cell.
        at: Position,
        /// The mob that caught the player.
        mob: MobId,
    },
}

/// Everything observers learn about one processed intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number after this intent (the first intent is turn 1).
    pub turn: u64,
    /// The intent that was processed.
    pub intent: Intent,
    /// What happened, in resolution order.
    pub events: Vec<TurnEvent>,
    /// Status of the resulting snapshot.
    pub status: GameStatus,
}

impl TurnRecord {
    /// Returns true if this turn ended the game.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Output of the turn engine for one accepted intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The next snapshot.
    pub state: GameState,
    /// What produced it.
    pub record: TurnRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_route_by_variant() {
        assert_eq!(Intent::Advance.kind(), IntentKind::Advance);
        assert_eq!(Intent::TURN_LEFT.kind(), IntentKind::Rotate);
        assert_eq!(Intent::TURN_RIGHT.kind(), IntentKind::Rotate);
    }

    #[test]
    fn intents_use_tagged_json() {
        let json = serde_json::to_string(&Intent::TURN_RIGHT).unwrap();
        assert_eq!(json, r#"{"type":"rotate","clockwise":true}"#);
        let back: Intent = serde_json::from_str(r#"{"type":"advance"}"#).unwrap();
        assert_eq!(back, Intent::Advance);
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(Intent::TURN_LEFT.to_string(), "rotate counter-clockwise");
    }
}
