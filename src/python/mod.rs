//! Python bindings for the durak-core engine.
//!
//! Mirrors the query and command surface so a Python render layer can
//! drive a game.
//!
//! # Quick Start
//!
//! ```python
//! import durak_core as durak
//!
//! game = durak.DurakGame(seed=42)
//! attacker = game.attacker
//!
//! # Open with the first playable card
//! card = game.playable(attacker)[0]
//! game.play(card, 0, 0)
//!
//! for action in game.legal_actions():
//!     print(action)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::DurakError;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

impl From<DurakError> for PyErr {
    fn from(err: DurakError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// durak-core: rules and state engine for two-player Durak.
#[pymodule]
fn durak_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyCard>()?;
    m.add_class::<PyDurakGame>()?;
    Ok(())
}
