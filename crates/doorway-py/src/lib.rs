//! # Doorway Python Bindings
//!
//! PyO3 bindings exposing the Doorway turn engine to a Python front end.
//!
//! ## Usage
//!
//! ```python
//! import doorway
//!
//! doorway.init_logging("info")
//!
//! game = doorway.Game()
//! game.rotate(clockwise=True)
//! game.advance()
//!
//! room = game.room()
//! if room.has_exit and room.has_mob:
//!     print(f"Mob ahead, heading {room.mob_direction}")
//!
//! # Occupant codes, row-major from y = 0: 0 empty, 1 player, 2 mob, 3 target
//! board = game.board().reshape(game.grid_size, game.grid_size)
//!
//! # Custom layout
//! game = doorway.Game(config_json='{"grid_size": 7, "target": {"x": 6, "y": 0}}')
//! ```

use std::sync::Arc;

use doorway_core::observers::{render_map, MapObserver, TracingObserver};
use doorway_core::{AdjacentRoomInfo, ConfigError, GameConfig, Session, TurnError};
use gridwalk::Position;
use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn config_error(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn turn_error(err: TurnError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

fn json_error(err: serde_json::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn xy(position: Position) -> (i32, i32) {
    (position.x, position.y)
}

/// The room straight ahead of the player.
#[pyclass(name = "RoomInfo", frozen)]
#[derive(Clone)]
pub struct PyRoomInfo {
    #[pyo3(get)]
    pub has_exit: bool,
    #[pyo3(get)]
    pub has_mob: bool,
    #[pyo3(get)]
    pub has_target: bool,
    /// Lowercase direction name, or `None` if no mob is ahead.
    #[pyo3(get)]
    pub mob_direction: Option<String>,
}

impl From<AdjacentRoomInfo> for PyRoomInfo {
    fn from(room: AdjacentRoomInfo) -> Self {
        Self {
            has_exit: room.has_exit,
            has_mob: room.has_mob(),
            has_target: room.has_target,
            mob_direction: room.mob_direction().map(|d| d.to_string()),
        }
    }
}

#[pymethods]
impl PyRoomInfo {
    fn __repr__(&self) -> String {
        format!(
            "RoomInfo(has_exit={}, has_mob={}, mob_direction={}, has_target={})",
            self.has_exit,
            self.has_mob,
            self.mob_direction.as_deref().unwrap_or("None"),
            self.has_target
        )
    }
}

/// One game session.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: Session,
}

#[pymethods]
impl PyGame {
    /// Start a game, from the canonical layout unless `config_json` is given.
    ///
    /// With `debug_map=True` an ASCII map is logged at debug level after
    /// every turn.
    #[new]
    #[pyo3(signature = (config_json=None, debug_map=false))]
    fn new(config_json: Option<&str>, debug_map: bool) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => serde_json::from_str::<GameConfig>(json).map_err(json_error)?,
            None => GameConfig::default(),
        };
        let mut session = Session::new(&config).map_err(config_error)?;
        session.observe(Arc::new(TracingObserver::new()));
        if debug_map {
            session.observe(Arc::new(MapObserver::new()));
        }
        Ok(Self { session })
    }

    /// Turn in place.
    #[pyo3(signature = (clockwise=true))]
    fn rotate(&mut self, clockwise: bool) -> PyResult<()> {
        self.session.rotate(clockwise).map_err(turn_error)?;
        Ok(())
    }

    /// Step forward; the mob moves too.
    fn advance(&mut self) -> PyResult<()> {
        self.session.advance().map_err(turn_error)?;
        Ok(())
    }

    /// Apply a pan gesture translation in screen pixels.
    ///
    /// Returns whether the gesture mapped to a move.
    #[pyo3(signature = (dx, dy))]
    fn swipe(&mut self, dx: f32, dy: f32) -> PyResult<bool> {
        let record = self
            .session
            .swipe(glam::Vec2::new(dx, dy))
            .map_err(turn_error)?;
        Ok(record.is_some())
    }

    /// Start the game over from its opening layout.
    fn reset(&mut self) {
        self.session.reset();
    }

    #[getter]
    fn status(&self) -> String {
        self.session.state().status().to_string()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.session.state().is_terminal()
    }

    #[getter]
    fn player(&self) -> (i32, i32) {
        xy(self.session.state().player().position)
    }

    #[getter]
    fn facing(&self) -> String {
        self.session.state().player().facing.to_string()
    }

    #[getter]
    fn mob(&self) -> (i32, i32) {
        xy(self.session.state().mob().position)
    }

    #[getter]
    fn mob_direction(&self) -> String {
        self.session.state().mob().direction.to_string()
    }

    #[getter]
    fn target(&self) -> (i32, i32) {
        xy(self.session.state().target())
    }

    #[getter]
    fn grid_size(&self) -> u32 {
        self.session.state().grid().get()
    }

    #[getter]
    fn turn(&self) -> u64 {
        self.session.state().turn()
    }

    /// What the player sees ahead.
    fn room(&self) -> PyRoomInfo {
        self.session.view().adjacent_room().into()
    }

    /// Occupant codes as a flat row-major `uint8` array.
    fn board<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        self.session.state().board().to_pyarray(py)
    }

    /// ASCII map, northernmost row first.
    fn render(&self) -> String {
        render_map(self.session.state())
    }

    /// The current snapshot as JSON.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(self.session.state()).map_err(json_error)
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "Game(turn={}, status={}, player={}, facing={})",
            state.turn(),
            state.status(),
            state.player().position,
            state.player().facing
        )
    }
}

/// Install a `tracing` formatter on stderr at `level`.
///
/// Returns false if a subscriber was already installed.
#[pyfunction]
#[pyo3(signature = (level="info"))]
fn init_logging(level: &str) -> PyResult<bool> {
    let level: tracing::Level = level
        .parse()
        .map_err(|_| PyValueError::new_err(format!("unknown log level: {level}")))?;
    Ok(tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok())
}

/// Python module definition.
#[pymodule]
fn _doorway(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyRoomInfo>()?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
