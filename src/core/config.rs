//! Session configuration.
//!
//! The pair counts offered to the player are a presentation choice
//! (`SUPPORTED_PAIR_COUNTS`); the session itself accepts any positive count.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Pair counts a presentation layer offers by default.
pub const SUPPORTED_PAIR_COUNTS: [usize; 4] = [2, 4, 6, 8];

/// Default number of pairs in a new session.
pub const DEFAULT_PAIR_COUNT: usize = 4;

/// Default pause before a mismatched pair flips back face-down.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for creating a `Session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of pairs dealt (deck holds twice as many cards).
    pub pair_count: usize,

    /// How long a mismatched pair stays visible before flipping back.
    #[serde(default = "default_mismatch_delay")]
    pub mismatch_delay: Duration,

    /// Shuffle seed. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_mismatch_delay() -> Duration {
    DEFAULT_MISMATCH_DELAY
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a config for the given pair count with default delay and entropy seed.
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Set the pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Is the pair count one of the presentation defaults?
    #[must_use]
    pub fn is_supported_pair_count(&self) -> bool {
        SUPPORTED_PAIR_COUNTS.contains(&self.pair_count)
    }
}
