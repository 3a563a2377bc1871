//! # pairs-engine
//!
//! Game-state engine for a single-player card matching game: a shuffled
//! grid of face-down pairs, two cards revealed per attempt, matched pairs
//! removed, mismatches flipped back after a short delay.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: A `Session` is a plain value held by the presentation
//!    layer. It never renders and never sleeps.
//!
//! 2. **Explicit Scheduling**: A mismatch returns a `ScheduledReversion`
//!    token keyed to the deck generation. A reset bumps the generation, so
//!    stale tokens cannot touch the new deck.
//!
//! 3. **Unbiased Shuffle**: Decks are shuffled with an explicit
//!    Fisher–Yates pass over a seeded ChaCha8 stream.
//!
//! ## Example
//!
//! ```
//! use pairs_engine::{Session, SessionConfig, TapOutcome};
//!
//! let mut session = Session::new(SessionConfig::new(2).with_seed(1)).unwrap();
//! assert_eq!(session.len(), 4);
//!
//! match session.tap(0).unwrap() {
//!     TapOutcome::Revealed { index } => assert_eq!(index, 0),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! if let TapOutcome::Mismatched(reversion) = session.tap(1).unwrap() {
//!     // ... wait reversion.delay, then:
//!     assert!(session.apply_reversion(&reversion));
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card identity, state and render view
//! - `session`: The state machine and reversion tokens
//! - `runtime`: Tokio driver that runs reversions on a timer
//! - `python`: PyO3 bindings (feature `python`)

pub mod cards;
pub mod core;
pub mod runtime;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameRng, Result, SessionConfig, SessionError, DEFAULT_MISMATCH_DELAY, DEFAULT_PAIR_COUNT,
    SUPPORTED_PAIR_COUNTS,
};

pub use crate::cards::{Card, CardId, CardView};

pub use crate::session::{Generation, ScheduledReversion, Session, TapOutcome};

pub use crate::runtime::SharedSession;
