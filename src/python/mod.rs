//! Python bindings for the crack-code engine.
//!
//! ```python
//! import crack_code
//!
//! game = crack_code.CodeBreaker(code_length=4, difficulty="hard", seed=42)
//! marks = game.submit("1234")   # ["exact", "absent", ...] or None if rejected
//! print(game.status, game.attempts_remaining)
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// crack_code: a code-breaking puzzle engine.
#[pymodule]
fn crack_code(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCodeBreaker>()?;
    Ok(())
}
