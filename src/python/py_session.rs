//! Session bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::cards::CardView;
use crate::core::{SessionConfig, DEFAULT_MISMATCH_DELAY, DEFAULT_PAIR_COUNT};
use crate::session::{Session, TapOutcome};

/// Python wrapper for a card snapshot entry.
#[pyclass(name = "CardView", frozen)]
#[derive(Clone, Debug)]
pub struct PyCardView(pub CardView);

#[pymethods]
impl PyCardView {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    /// Face value, or None while face-down.
    #[getter]
    fn value(&self) -> Option<u32> {
        self.0.value
    }

    #[getter]
    fn face_up(&self) -> bool {
        self.0.face_up
    }

    #[getter]
    fn matched(&self) -> bool {
        self.0.matched
    }

    fn __repr__(&self) -> String {
        match self.0.value {
            Some(value) => format!("CardView(id={}, value={}, matched={})", self.0.id.raw(), value, self.0.matched),
            None => format!("CardView(id={}, hidden)", self.0.id.raw()),
        }
    }
}

/// Python wrapper for Session.
///
/// Python owns the clock: after a "mismatch" tap, wait `mismatch_delay_ms`
/// and call `flush_reversions()`.
#[pyclass(name = "Session")]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - pair_count: Number of pairs (deck has twice as many cards)
    /// - seed: Shuffle seed, random when omitted
    /// - mismatch_delay_ms: How long a mismatch stays visible
    #[new]
    #[pyo3(signature = (
        pair_count = DEFAULT_PAIR_COUNT,
        seed = None,
        mismatch_delay_ms = DEFAULT_MISMATCH_DELAY.as_millis() as u64
    ))]
    fn new(pair_count: usize, seed: Option<u64>, mismatch_delay_ms: u64) -> PyResult<Self> {
        let mut config =
            SessionConfig::new(pair_count).with_mismatch_delay(Duration::from_millis(mismatch_delay_ms));
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        Ok(Self {
            session: Session::new(config)?,
        })
    }

    /// Tap a card by display index.
    ///
    /// Returns one of "ignored", "revealed", "matched", "mismatch".
    fn tap(&mut self, index: usize) -> PyResult<&'static str> {
        let outcome = match self.session.tap(index)? {
            TapOutcome::Ignored => "ignored",
            TapOutcome::Revealed { .. } => "revealed",
            TapOutcome::Matched { .. } => "matched",
            TapOutcome::Mismatched(_) => "mismatch",
        };
        Ok(outcome)
    }

    /// Deal a fresh deck.
    #[pyo3(signature = (pair_count, seed = None))]
    fn reset(&mut self, pair_count: usize, seed: Option<u64>) -> PyResult<()> {
        match seed {
            Some(seed) => self.session.reset_with_seed(pair_count, seed)?,
            None => self.session.reset(pair_count)?,
        }
        Ok(())
    }

    /// Flip back every mismatched pair still showing.
    fn flush_reversions(&mut self) -> usize {
        self.session.flush_reversions()
    }

    fn snapshot(&self) -> Vec<PyCardView> {
        self.session.snapshot().into_iter().map(PyCardView).collect()
    }

    fn is_won(&self) -> bool {
        self.session.is_won()
    }

    #[getter]
    fn pending_selection(&self) -> Option<usize> {
        self.session.pending_selection()
    }

    #[getter]
    fn pair_count(&self) -> usize {
        self.session.pair_count()
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.session.generation().0
    }

    fn __len__(&self) -> usize {
        self.session.len()
    }

    fn __repr__(&self) -> String {
        let status = if self.session.is_won() { "won" } else { "ongoing" };
        format!(
            "Session(pairs={}, remaining={}, status={})",
            self.session.pair_count(),
            self.session.remaining_pairs(),
            status
        )
    }
}
