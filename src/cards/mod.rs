//! Card types.
//!
//! - `CardId`: Identifier unique within a session
//! - `Card`: Face value plus face-up/matched flags
//! - `CardView`: What a renderer sees; hides the value of face-down cards

pub mod card;

pub use card::{Card, CardId, CardView};
