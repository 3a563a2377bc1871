//! Async driver for sessions.
//!
//! `Session` itself never sleeps; it hands out `ScheduledReversion` tokens.
//! `SharedSession` owns the clock: it runs each reversion as a tokio task
//! after the mismatch delay.

pub mod shared;

pub use shared::SharedSession;
