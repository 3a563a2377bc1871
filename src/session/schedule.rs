//! Scheduled mismatch reversions.
//!
//! A mismatch leaves both cards face-up and hands back a
//! `ScheduledReversion`. Whoever owns the clock waits `delay` and then
//! applies it. The token carries the session generation it was issued in;
//! a reset bumps the generation, so tokens from an earlier deck are inert.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Deck generation. Bumped on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// A pending "flip these two cards back face-down" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledReversion {
    /// Generation of the deck the cards belong to.
    pub generation: Generation,

    /// Issue order within the session; distinguishes repeat mismatches
    /// on the same two cards.
    pub ticket: u64,

    /// Display indices of the mismatched cards, first tap first.
    pub cards: [usize; 2],

    /// How long to wait before applying.
    pub delay: Duration,
}

impl ScheduledReversion {
    /// Does this reversion involve the card at `index`?
    #[must_use]
    pub fn involves(&self, index: usize) -> bool {
        self.cards.contains(&index)
    }
}
