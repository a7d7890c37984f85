//! Outcome resolver: win and collision checks after an advance.

use crate::intent::{Intent, IntentKind, TurnEvent};
use crate::state::{GameState, GameStatus};

use super::Resolver;

/// Decides whether an advance ended the game.
///
/// Reads the positions [`MovementResolver`](super::MovementResolver) wrote to
/// `next`. Reaching the target is checked first: if the player lands on the
/// target and the mob lands there too, the player wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeResolver;

impl OutcomeResolver {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for OutcomeResolver {
    fn handles(&self) -> &[IntentKind] {
        &[IntentKind::Advance]
    }

    fn resolve(
        &self,
        intent: Intent,
        _current: &GameState,
        next: &mut GameState,
        events: &mut Vec<TurnEvent>,
    ) {
        if intent != Intent::Advance {
            return;
        }

        let player = next.player.position;
        if player == next.target {
            next.status = GameStatus::Won;
            events.push(TurnEvent::Won { at: player });
        } else if player == next.mob.position {
            next.status = GameStatus::GameOver;
            events.push(TurnEvent::Caught {
                at: player,
                mob: next.mob.id,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Mob, MobId, Player};
    use gridwalk::{Direction, GridSize, Position};

    fn judge(player: Position, mob: Position, target: Position) -> (GameStatus, Vec<TurnEvent>) {
        let mut next = GameState::from_parts(
            Player::new(player, Direction::North),
            Mob::new(MobId::new(1), mob, Direction::East),
            target,
            GridSize::new(5).unwrap(),
        )
        .unwrap();
        let current = next.clone();
        let mut events = Vec::new();
        OutcomeResolver::new().resolve(Intent::Advance, &current, &mut next, &mut events);
        (next.status(), events)
    }

    #[test]
    fn reaching_target_wins() {
        let (status, events) = judge(Position::new(4, 4), Position::new(0, 0), Position::new(4, 4));
        assert_eq!(status, GameStatus::Won);
        assert_eq!(events, vec![TurnEvent::Won { at: Position::new(4, 4) }]);
    }

    #[test]
    fn sharing_a_cell_with_the_mob_loses() {
        let (status, events) = judge(Position::new(2, 2), Position::new(2, 2), Position::new(4, 4));
        assert_eq!(status, GameStatus::GameOver);
        assert_eq!(
            events,
            vec![TurnEvent::Caught {
                at: Position::new(2, 2),
                mob: MobId::new(1),
            }]
        );
    }

    #[test]
    fn win_takes_precedence_over_collision() {
        let (status, events) = judge(Position::new(4, 4), Position::new(4, 4), Position::new(4, 4));
        assert_eq!(status, GameStatus::Won);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn nothing_happens_apart() {
        let (status, events) = judge(Position::new(1, 1), Position::new(2, 2), Position::new(4, 4));
        assert_eq!(status, GameStatus::Playing);
        assert!(events.is_empty());
    }
}
