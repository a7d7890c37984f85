//! Movement resolver: advance intents.
//!
//! Handles, in order:
//! - the player's step along their facing (no-op into a wall)
//! - the mob's bounce step, which happens whether or not the player moved

use gridwalk::{can_move_in_direction, move_in_direction};

use crate::intent::{Intent, IntentKind, TurnEvent};
use crate::state::GameState;

use super::Resolver;

/// Moves the player forward and the mob one bounce step.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementResolver;

impl MovementResolver {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn step_player(current: &GameState, next: &mut GameState, events: &mut Vec<TurnEvent>) {
        let player = current.player;
        if can_move_in_direction(player.facing, player.position, current.grid) {
            let to = move_in_direction(player.facing, player.position);
            next.player.position = to;
            events.push(TurnEvent::PlayerMoved {
                from: player.position,
                to,
            });
        } else {
            events.push(TurnEvent::PlayerBlocked {
                at: player.position,
                facing: player.facing,
            });
        }
    }

    fn step_mob(current: &GameState, next: &mut GameState, events: &mut Vec<TurnEvent>) {
        let (mob, motion) = current.mob.bounced(current.grid);
        next.mob = mob;
        events.push(TurnEvent::MobMoved {
            id: mob.id,
            from: current.mob.position,
            to: motion.position,
            direction: motion.direction,
            bounced: motion.bounced,
        });
    }
}

impl Resolver for MovementResolver {
    fn handles(&self) -> &[IntentKind] {
        &[IntentKind::Advance]
    }

    fn resolve(
        &self,
        intent: Intent,
        current: &GameState,
        next: &mut GameState,
        events: &mut Vec<TurnEvent>,
    ) {
        if intent != Intent::Advance {
            return;
        }
        Self::step_player(current, next, events);
        Self::step_mob(current, next, events);
    }
}
