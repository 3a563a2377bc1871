//! Python bindings for the pairs engine.
//!
//! # Quick Start
//!
//! ```python
//! import time
//! import pairs_engine as pe
//!
//! session = pe.Session(pair_count=4, seed=42)
//! session.tap(0)
//! if session.tap(1) == "mismatch":
//!     time.sleep(1.0)
//!     session.flush_reversions()
//!
//! for card in session.snapshot():
//!     print(card)
//! ```

use pyo3::exceptions::{PyIndexError, PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::SessionError;

mod py_session;

pub use py_session::*;

impl From<SessionError> for PyErr {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
            SessionError::UnknownCard(_) => PyKeyError::new_err(err.to_string()),
            SessionError::InvalidPairCount(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

/// pairs_engine: state machine for a single-player card matching game.
#[pymodule]
fn pairs_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PyCardView>()?;
    m.add("SUPPORTED_PAIR_COUNTS", crate::core::SUPPORTED_PAIR_COUNTS.to_vec())?;
    Ok(())
}
