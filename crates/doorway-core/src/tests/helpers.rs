//! Layout factories and proptest strategies shared by the crate tests.

use gridwalk::{Direction, GridSize, Position};
use proptest::prelude::*;

use crate::entity::{Mob, MobId, Player};
use crate::intent::Intent;
use crate::session::Session;
use crate::state::GameState;

// =============================================================================
// Layouts
// =============================================================================

/// Builds a playing snapshot on the canonical 5x5 grid with the target in
/// the north-east corner.
///
/// # Panics
///
/// Panics if any position is off the grid.
pub fn layout(player: (i32, i32), facing: Direction, mob: (i32, i32), heading: Direction) -> GameState {
    GameState::from_parts(
        Player::new(player.into(), facing),
        Mob::new(MobId::new(1), mob.into(), heading),
        Position::new(4, 4),
        GridSize::new(5).unwrap(),
    )
    .unwrap()
}

/// Starts a session from [`layout`].
pub fn session_with(
    player: (i32, i32),
    facing: Direction,
    mob: (i32, i32),
    heading: Direction,
) -> Session {
    Session::from_state(layout(player, facing, mob, heading)).unwrap()
}

/// Applies every intent, panicking on the first rejection.
pub fn play(session: &mut Session, intents: &[Intent]) {
    for &intent in intents {
        session.apply(intent).unwrap();
    }
}

/// Returns true if every token of `state` lies on its grid.
pub fn all_on_grid(state: &GameState) -> bool {
    let grid = state.grid();
    grid.contains(state.player().position)
        && grid.contains(state.mob().position)
        && grid.contains(state.target())
}

// =============================================================================
// Strategies
// =============================================================================

/// Any of the four directions.
pub fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::East),
        Just(Direction::South),
        Just(Direction::West),
    ]
}

/// Either intent, with advances twice as likely as rotations.
pub fn arb_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        2 => Just(Intent::Advance),
        1 => any::<bool>().prop_map(|clockwise| Intent::Rotate { clockwise }),
    ]
}

/// A cell on a grid of side `size`.
pub fn arb_position(size: u32) -> impl Strategy<Value = Position> {
    let max = i32::try_from(size).unwrap();
    (0..max, 0..max).prop_map(|(x, y)| Position::new(x, y))
}

/// A valid opening snapshot on a grid between 2x2 and 8x8.
pub fn arb_state() -> impl Strategy<Value = GameState> {
    (2u32..=8)
        .prop_flat_map(|size| {
            (
                Just(size),
                arb_position(size),
                arb_direction(),
                arb_position(size),
                arb_direction(),
                arb_position(size),
            )
        })
        .prop_map(|(size, player, facing, mob, heading, target)| {
            GameState::from_parts(
                Player::new(player, facing),
                Mob::new(MobId::new(1), mob, heading),
                target,
                GridSize::new(size).unwrap(),
            )
            .unwrap()
        })
}
