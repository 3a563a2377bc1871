//! Core engine types: RNG, configuration, errors.
//!
//! These are independent of the card and session modules and can be
//! used on their own (e.g. the shuffle).

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SessionConfig, DEFAULT_MISMATCH_DELAY, DEFAULT_PAIR_COUNT, SUPPORTED_PAIR_COUNTS};
pub use error::{Result, SessionError};
pub use rng::GameRng;
