//! Facing resolver: rotate intents.

use gridwalk::rotate_player_direction;

use crate::intent::{Intent, IntentKind, TurnEvent};
use crate::state::GameState;

use super::Resolver;

/// Turns the player a quarter-turn in place.
///
/// Only the facing changes. The mob does not move and the outcome is not
/// re-checked, since turning cannot win or lose the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacingResolver;

impl FacingResolver {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for FacingResolver {
    fn handles(&self) -> &[IntentKind] {
        &[IntentKind::Rotate]
    }

    fn resolve(
        &self,
        intent: Intent,
        current: &GameState,
        next: &mut GameState,
        events: &mut Vec<TurnEvent>,
    ) {
        let Intent::Rotate { clockwise } = intent else {
            return;
        };

        let from = current.player.facing;
        let to = rotate_player_direction(from, clockwise);
        next.player.facing = to;
        events.push(TurnEvent::Rotated { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk::Direction;

    fn run(intent: Intent) -> (GameState, Vec<TurnEvent>) {
        let current = GameState::canonical();
        let mut next = current.clone();
        let mut events = Vec::new();
        FacingResolver::new().resolve(intent, &current, &mut next, &mut events);
        (next, events)
    }

    #[test]
    fn clockwise_turns_north_to_east() {
        let (next, events) = run(Intent::TURN_RIGHT);
        assert_eq!(next.player().facing, Direction::East);
        assert_eq!(
            events,
            vec![TurnEvent::Rotated {
                from: Direction::North,
                to: Direction::East
            }]
        );
    }

    #[test]
    fn rotation_leaves_everything_else_alone() {
        let (next, _) = run(Intent::TURN_LEFT);
        let current = GameState::canonical();
        assert_eq!(next.player().facing, Direction::West);
        assert_eq!(next.player().position, current.player().position);
        assert_eq!(next.mob(), current.mob());
        assert_eq!(next.status(), current.status());
    }

    #[test]
    fn advance_is_ignored() {
        let (next, events) = run(Intent::Advance);
        assert_eq!(next, GameState::canonical());
        assert!(events.is_empty());
    }
}
