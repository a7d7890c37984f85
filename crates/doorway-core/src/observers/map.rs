//! ASCII dungeon map for debugging.

use tracing::debug;

use crate::intent::TurnRecord;
use crate::observer::TurnObserver;
use crate::state::GameState;

/// Renders the whole grid as text.
///
/// The top line is the northernmost row. Each cell is one glyph followed by a
/// space: `P` player, `M` mob, `X` target, `.` empty. Where tokens overlap the
/// player is drawn over the mob, and the mob over the target.
///
/// # Example
///
/// ```
/// use doorway_core::observers::render_map;
/// use doorway_core::state::GameState;
///
/// let map = render_map(&GameState::canonical());
/// let rows: Vec<&str> = map.lines().collect();
///
/// assert_eq!(rows[0], ". . . . X ");
/// assert_eq!(rows[1], ". . . M . ");
/// assert_eq!(rows[4], "P . . . . ");
/// ```
#[must_use]
pub fn render_map(state: &GameState) -> String {
    let max = state.grid().max_index();
    let mut out = String::new();
    for y in (0..=max).rev() {
        for x in 0..=max {
            let glyph = state
                .occupant_at(gridwalk::Position::new(x, y))
                .map_or('.', |o| o.glyph());
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Logs [`render_map`] at debug level after every turn and reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapObserver;

impl MapObserver {
    /// Creates the observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn log(turn: u64, state: &GameState) {
        let mut map = String::from("\n=== DUNGEON MAP ===\n");
        map.push_str(&render_map(state));
        map.push_str("===================");
        debug!(turn, "{map}");
    }
}

impl TurnObserver for MapObserver {
    fn name(&self) -> &str {
        "map"
    }

    fn on_transition(&self, record: &TurnRecord, state: &GameState) {
        Self::log(record.turn, state);
    }

    fn on_reset(&self, state: &GameState) {
        Self::log(state.turn(), state);
    }
}
