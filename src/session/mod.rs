//! Game session: deck, selection state, tap transitions and the
//! generation-keyed mismatch reversions.
//!
//! ## Key Types
//!
//! - `Session`: Owned game state and its transitions
//! - `TapOutcome`: Result of a single tap
//! - `ScheduledReversion`: Token for flipping a mismatched pair back
//! - `Generation`: Deck generation, bumped on reset

pub mod schedule;
pub mod state;

pub use schedule::{Generation, ScheduledReversion};
pub use state::{Session, TapOutcome};
