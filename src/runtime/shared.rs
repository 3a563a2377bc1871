//! Shared session with timed mismatch reversions.

use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::cards::CardView;
use crate::core::{Result, SessionConfig};
use crate::session::{ScheduledReversion, Session, TapOutcome};

struct Inner {
    session: Session,
    /// Reversion tasks not yet known to be finished.
    tasks: Vec<JoinHandle<()>>,
}

/// A `Session` behind an async mutex, with mismatch reversions run as
/// tokio tasks.
///
/// Taps and reversions take the same lock, so they never interleave.
/// Other taps are served while a reversion task sleeps. `reset` aborts
/// outstanding tasks; any that already woke find a newer generation and
/// do nothing.
///
/// Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Inner>>,
}

impl SharedSession {
    /// Create a shared session and deal its first deck.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self::from_session(Session::new(config)?))
    }

    /// Wrap an existing session.
    pub fn from_session(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                session,
                tasks: Vec::new(),
            })),
        }
    }

    /// Tap a card; a mismatch schedules its reversion after the delay.
    pub async fn tap(&self, index: usize) -> Result<TapOutcome> {
        let mut inner = self.inner.lock().await;
        let outcome = inner.session.tap(index)?;

        if let TapOutcome::Mismatched(reversion) = outcome {
            let handle = self.schedule(reversion);
            inner.tasks.retain(|task| !task.is_finished());
            inner.tasks.push(handle);
        }
        Ok(outcome)
    }

    /// Deal a fresh deck and cancel every scheduled reversion.
    pub async fn reset(&self, pair_count: usize) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.session.reset(pair_count)?;

        let cancelled = inner.tasks.len();
        for task in inner.tasks.drain(..) {
            task.abort();
        }
        if cancelled > 0 {
            debug!("cancelled {} reversion task(s) on reset", cancelled);
        }
        Ok(())
    }

    pub async fn snapshot(&self) -> Vec<CardView> {
        self.inner.lock().await.session.snapshot()
    }

    pub async fn is_won(&self) -> bool {
        self.inner.lock().await.session.is_won()
    }

    /// Copy of the current session state.
    pub async fn session(&self) -> Session {
        self.inner.lock().await.session.clone()
    }

    fn schedule(&self, reversion: ScheduledReversion) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            sleep(reversion.delay).await;
            let mut inner = inner.lock().await;
            inner.session.apply_reversion(&reversion);
        })
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSession").finish_non_exhaustive()
    }
}
