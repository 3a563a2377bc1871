//! The game session: deck, selection state and tap transitions.
//!
//! ## States
//!
//! ```text
//! no-selection ──tap──▶ one-pending ──tap──┬─▶ matched ────────────┐
//!      ▲                                    └─▶ mismatched          │
//!      │                                        (reversion issued) │
//!      └────────────────────────────────────────────────────────────┘
//! reset from any state ──▶ no-selection
//! ```
//!
//! The pending selection is cleared as soon as the second card is tapped,
//! including on a mismatch. A third tap during the mismatch delay starts a
//! new selection while the two mismatched cards are still showing; taps on
//! those two cards are ignored because they are face-up.

use std::time::Duration;

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::schedule::{Generation, ScheduledReversion};
use crate::cards::{Card, CardId, CardView};
use crate::core::{GameRng, Result, SessionConfig, SessionError};

/// What a tap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Card was face-up or matched; nothing changed.
    Ignored,
    /// First card of an attempt is now face-up and pending.
    Revealed { index: usize },
    /// Second card matched the pending one; both are matched.
    Matched { first: usize, second: usize },
    /// Second card differs; both stay face-up until the reversion is applied.
    Mismatched(ScheduledReversion),
}

/// A single-player matching game session.
///
/// Cheap to clone: the deck lives in a persistent `im::Vector`.
#[derive(Clone, Debug)]
pub struct Session {
    cards: Vector<Card>,
    /// CardId -> display index for the current deck.
    index: FxHashMap<CardId, usize>,
    pair_count: usize,
    pending: Option<usize>,
    generation: Generation,
    reversions: SmallVec<[ScheduledReversion; 2]>,
    next_ticket: u64,
    mismatch_delay: Duration,
    rng: GameRng,
    next_card_id: u32,
}

impl Session {
    /// Create a session and deal its first deck.
    ///
    /// Fails with `InvalidPairCount` when `config.pair_count` is zero.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut session = Self {
            cards: Vector::new(),
            index: FxHashMap::default(),
            pair_count: 0,
            pending: None,
            generation: Generation::default(),
            reversions: SmallVec::new(),
            next_ticket: 0,
            mismatch_delay: config.mismatch_delay,
            rng,
            next_card_id: 0,
        };
        session.reset(config.pair_count)?;
        Ok(session)
    }

    /// Deal a fresh shuffled deck of `pair_count` pairs.
    ///
    /// Clears the pending selection and invalidates every outstanding
    /// reversion. A zero pair count is rejected and leaves the session as it was.
    pub fn reset(&mut self, pair_count: usize) -> Result<()> {
        let max_value = Self::checked_pair_count(pair_count)?;

        let mut deck = Vec::with_capacity(pair_count * 2);
        for value in 1..=max_value {
            deck.push(Card::new(self.alloc_card_id(), value));
            deck.push(Card::new(self.alloc_card_id(), value));
        }
        self.rng.shuffle(&mut deck);

        self.index = deck.iter().enumerate().map(|(i, card)| (card.id(), i)).collect();
        self.cards = Vector::from(deck);
        self.pair_count = pair_count;
        self.pending = None;
        self.reversions.clear();
        self.generation = self.generation.next();

        debug!("dealt {} pairs ({})", pair_count, self.generation);
        Ok(())
    }

    /// Reseed the shuffle and deal a fresh deck.
    pub fn reset_with_seed(&mut self, pair_count: usize, seed: u64) -> Result<()> {
        Self::checked_pair_count(pair_count)?;
        self.rng = GameRng::new(seed);
        self.reset(pair_count)
    }

    /// Tap the card at display position `index`.
    pub fn tap(&mut self, index: usize) -> Result<TapOutcome> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;

        if !card.is_selectable() {
            trace!("ignored tap on {} at {}", card.id(), index);
            return Ok(TapOutcome::Ignored);
        }
        card.reveal();
        let value = card.value();

        let Some(first) = self.pending.take() else {
            self.pending = Some(index);
            return Ok(TapOutcome::Revealed { index });
        };

        if self.cards[first].value() == value {
            self.update(first, Card::mark_matched);
            self.update(index, Card::mark_matched);
            debug!("matched value {} at {} and {}", value, first, index);
            return Ok(TapOutcome::Matched {
                first,
                second: index,
            });
        }

        let reversion = ScheduledReversion {
            generation: self.generation,
            ticket: self.next_ticket,
            cards: [first, index],
            delay: self.mismatch_delay,
        };
        self.next_ticket += 1;
        self.reversions.push(reversion);
        debug!(
            "mismatch at {} and {}, reverting in {:?}",
            first, index, self.mismatch_delay
        );
        Ok(TapOutcome::Mismatched(reversion))
    }

    /// Tap a card by its id.
    pub fn tap_card(&mut self, id: CardId) -> Result<TapOutcome> {
        let index = self
            .index_of(id)
            .ok_or(SessionError::UnknownCard(id))?;
        self.tap(index)
    }

    /// Flip a mismatched pair back face-down.
    ///
    /// Applies only if the reversion is still outstanding in the current
    /// generation and both cards are still face-up and unmatched. Returns
    /// whether any card changed.
    pub fn apply_reversion(&mut self, reversion: &ScheduledReversion) -> bool {
        if reversion.generation != self.generation {
            trace!(
                "dropping stale reversion from {} (now {})",
                reversion.generation,
                self.generation
            );
            return false;
        }

        let Some(pos) = self.reversions.iter().position(|r| r == reversion) else {
            return false;
        };
        self.reversions.remove(pos);

        let revertible = reversion.cards.iter().all(|&i| {
            self.cards
                .get(i)
                .is_some_and(|card| card.is_face_up() && !card.is_matched())
        });
        if !revertible {
            return false;
        }

        for &i in &reversion.cards {
            self.update(i, Card::conceal);
        }
        debug!("reverted {} and {}", reversion.cards[0], reversion.cards[1]);
        true
    }

    /// Apply every outstanding reversion now. Returns how many applied.
    pub fn flush_reversions(&mut self) -> usize {
        let due = self.reversions.clone();
        let mut applied = 0;
        for reversion in &due {
            if self.apply_reversion(reversion) {
                applied += 1;
            }
        }
        applied
    }

    // === Queries ===

    /// Render snapshot in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CardView> {
        self.cards.iter().map(Card::view).collect()
    }

    /// Has every card been matched?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Display index of a card.
    #[must_use]
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Index of the card awaiting its partner, if any.
    #[must_use]
    pub fn pending_selection(&self) -> Option<usize> {
        self.pending
    }

    #[must_use]
    pub fn pending_reversions(&self) -> &[ScheduledReversion] {
        &self.reversions
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Pairs not yet matched.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_matched()).count() / 2
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: a session never holds an empty deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    /// Change the delay used for future mismatches.
    pub fn set_mismatch_delay(&mut self, delay: Duration) {
        self.mismatch_delay = delay;
    }

    // === Internals ===

    fn checked_pair_count(pair_count: usize) -> Result<u32> {
        if pair_count == 0 {
            return Err(SessionError::InvalidPairCount(pair_count));
        }
        u32::try_from(pair_count).map_err(|_| SessionError::InvalidPairCount(pair_count))
    }

    fn alloc_card_id(&mut self) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        id
    }

    fn update(&mut self, index: usize, f: impl FnOnce(&mut Card)) {
        if let Some(card) = self.cards.get_mut(index) {
            f(card);
        }
    }
}
