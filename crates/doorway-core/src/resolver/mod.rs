//! Resolvers turn an intent into writes on the next snapshot.
//!
//! The [`TurnEngine`](crate::engine::TurnEngine) clones the current snapshot
//! into `next` and runs its resolvers in a fixed order. Each resolver
//! declares the [`IntentKind`]s it handles and is skipped for the others.
//!
//! # Invariants
//!
//! - Resolvers read tokens from `current` and write them to `next`.
//! - [`OutcomeResolver`] is the exception: it judges the positions already
//!   written to `next`, so it must run after [`MovementResolver`].
//! - Resolvers are deterministic and never fail; a blocked move is recorded
//!   as an event, not an error.
//!
//! # Available Resolvers
//!
//! - [`FacingResolver`]: rotate intents turn the player in place
//! - [`MovementResolver`]: advance intents step the player, then the mob
//! - [`OutcomeResolver`]: advance intents check win, then collision

mod facing;
mod movement;
mod outcome;

pub use facing::FacingResolver;
pub use movement::MovementResolver;
pub use outcome::OutcomeResolver;

use crate::intent::{Intent, IntentKind, TurnEvent};
use crate::state::GameState;

/// One stage of turn resolution.
///
/// # Example
///
/// ```
/// use doorway_core::intent::{Intent, IntentKind, TurnEvent};
/// use doorway_core::resolver::Resolver;
/// use doorway_core::state::GameState;
///
/// struct Noop;
///
/// impl Resolver for Noop {
///     fn handles(&self) -> &[IntentKind] {
///         &[IntentKind::Advance]
///     }
///
///     fn resolve(
///         &self,
///         _intent: Intent,
///         _current: &GameState,
///         _next: &mut GameState,
///         _events: &mut Vec<TurnEvent>,
///     ) {
///     }
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Returns the intent kinds this resolver handles.
    fn handles(&self) -> &[IntentKind];

    /// Applies the intent.
    ///
    /// # Arguments
    ///
    /// * `intent` - The intent being processed
    /// * `current` - The snapshot the turn started from
    /// * `next` - The snapshot being built (mutate this)
    /// * `events` - Append what happened, in order
    fn resolve(
        &self,
        intent: Intent,
        current: &GameState,
        next: &mut GameState,
        events: &mut Vec<TurnEvent>,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_is_object_safe() {
        fn _accepts_boxed(_resolver: Box<dyn Resolver>) {}
        fn _accepts_slice(_resolvers: &[Box<dyn Resolver>]) {}
    }
}
